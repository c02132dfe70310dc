//! Display languages offered by the language switch.

use serde::Serialize;

/// One entry of the language selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// Name shown in the selection control
    pub label: &'static str,
    /// Locale code handed to the locale service
    pub code: &'static str,
}

/// The fixed set of languages the start screen offers, in display order.
pub const LANGUAGE_OPTIONS: [LanguageOption; 5] = [
    LanguageOption { label: "English", code: "en" },
    LanguageOption { label: "French", code: "fr" },
    LanguageOption { label: "Chinese", code: "cn" },
    LanguageOption { label: "Portuguese", code: "pt" },
    LanguageOption { label: "Dutch", code: "nl" },
];

/// Finds the option with exactly this code.
pub fn language_option(code: &str) -> Option<&'static LanguageOption> {
    LANGUAGE_OPTIONS.iter().find(|option| option.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_option_lookup() {
        assert_eq!(language_option("fr").map(|o| o.label), Some("French"));
        assert!(language_option("de").is_none());
        assert!(language_option("FR").is_none());
    }
}
