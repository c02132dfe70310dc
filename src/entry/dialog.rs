//! Two-state controller shared by the start screen's modal dialogs.

use std::marker::PhantomData;

/// Whether a dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// Not showing (initial state)
    #[default]
    Closed,
    /// Showing and waiting for a selection
    Open,
}

/// Open/close state machine for a dialog that yields one payload of type `T`.
///
/// | call | from Closed | from Open |
/// |---|---|---|
/// | `open()` | Open | Open |
/// | `close()` | Closed | Closed |
/// | `select(p, f)` | Closed, `f(p)` | Closed, `f(p)` |
///
/// The controller keeps no memory of earlier payloads, so reopening always
/// starts fresh.
#[derive(Debug)]
pub struct DialogController<T> {
    state: DialogState,
    _payload: PhantomData<fn(T)>,
}

impl<T> DialogController<T> {
    /// Creates a closed controller.
    pub const fn new() -> Self {
        Self {
            state: DialogState::Closed,
            _payload: PhantomData,
        }
    }

    /// Current state.
    pub const fn state(&self) -> DialogState {
        self.state
    }

    /// Whether the dialog is showing.
    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Shows the dialog.
    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    /// Hides the dialog without a selection. Always succeeds.
    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Closes the dialog and forwards `payload` to `on_select`.
    ///
    /// The dialog is closed before the handler runs, so a failing handler
    /// still leaves it closed; the handler's result is returned untouched.
    pub fn select<R>(&mut self, payload: T, on_select: impl FnOnce(T) -> R) -> R {
        self.close();
        on_select(payload)
    }
}

impl<T> Default for DialogController<T> {
    fn default() -> Self {
        Self::new()
    }
}
