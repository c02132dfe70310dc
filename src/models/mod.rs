//! Data models for templates, recent items and language options.
//!
//! Models are independent of UI and orchestration logic. None of them is
//! persisted by the start screen.

pub mod language;
pub mod recent;
pub mod template;

// Re-export all model types
pub use language::{language_option, LanguageOption, LANGUAGE_OPTIONS};
pub use recent::{load_recent_items, RecentItem};
pub use template::{Template, TemplateCatalog, EMPTY_TEMPLATE_NAME};
