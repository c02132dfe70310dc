//! Language switch backed by the shared locale service.

use crate::i18n::{SharedLocale, Text};
use crate::models::{language_option, LanguageOption, LANGUAGE_OPTIONS};

/// Reads the active locale and requests changes to it.
#[derive(Debug, Clone)]
pub struct LocaleSwitcher {
    service: SharedLocale,
    initial: Option<&'static LanguageOption>,
}

impl LocaleSwitcher {
    /// Wraps `service`, remembering which option matched its locale at this point.
    pub fn new(service: SharedLocale) -> Self {
        let initial = language_option(&service.get());
        Self { service, initial }
    }

    /// Active language code.
    pub fn current_language(&self) -> String {
        self.service.get()
    }

    /// Asks the locale service to switch languages.
    pub fn change_language(&self, code: &str) {
        tracing::info!("Switching language to {code}");
        self.service.set(code);
    }

    /// Option shown when the switch first appeared, if any matched.
    pub const fn initial_selection(&self) -> Option<&'static LanguageOption> {
        self.initial
    }

    /// Option matching the active language, if any.
    pub fn selected_option(&self) -> Option<&'static LanguageOption> {
        language_option(&self.service.get())
    }

    /// Every offered language, in display order.
    pub fn options(&self) -> &'static [LanguageOption] {
        &LANGUAGE_OPTIONS
    }

    /// Resolves `text` in the active language.
    pub fn text(&self, text: Text) -> &'static str {
        self.service.text(text)
    }

    /// The underlying service, for subscribing to changes.
    pub fn service(&self) -> &SharedLocale {
        &self.service
    }
}
