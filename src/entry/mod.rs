//! Start screen state and orchestration, independent of rendering.
//!
//! Everything here is synchronous and runs on the UI thread. Rendering and
//! key handling live in [`crate::tui`]; the terminal host lives in
//! [`crate::app`].

pub mod dialog;
pub mod file_intake;
pub mod locale_switcher;
pub mod orchestrator;
pub mod recent_items;

pub use dialog::{DialogController, DialogState};
pub use file_intake::{
    parse_dropped_paths, parse_picker_input, ChosenFile, FileIntakeAdapter, IntakeSource,
};
pub use locale_switcher::LocaleSwitcher;
pub use orchestrator::{
    ActionOutcome, DialogKind, EntryOrchestrator, EntryProps, HelpLink, HostCollaborator,
    StartAction,
};
pub use recent_items::{RecentItemsList, RecentView};
