//! Component trait pattern for the start screen's popups.
//!
//! Popups (template dialogs, language picker, file prompt) own their cursor
//! state, handle their own keys and report back to the screen through
//! [`ComponentEvent`]s.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::i18n::LocaleService;
use crate::models::Template;
use crate::tui::Theme;

/// A popup that can be rendered and handle input.
pub trait Component {
    /// Handle keyboard input.
    ///
    /// Returns `Some(event)` when the parent has to act, `None` when the key
    /// was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent>;

    /// Render the component within `area`, resolving text through `locale`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleService);
}

/// Events emitted by popups and processed by the start screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentEvent {
    /// A template was chosen in a template dialog
    TemplateSelected(Template),
    /// A language was chosen in the language picker
    LanguageSelected(&'static str),
    /// A path was submitted from the file prompt
    PathSubmitted(String),
    /// The user dismissed the popup without choosing
    Cancelled,
}
