//! Branding and application identity configuration.
//!
//! This module centralizes the names, directories and outward links shown on the
//! start screen. Links are fixed navigation targets; nothing here is
//! parameterized at runtime.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Universal Data Tool";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "udt-start";

/// The directory name for application data (config, recent items, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "UniversalDataTool";

/// The GitHub repository owner/organization name.
pub const GITHUB_OWNER: &str = "UniversalDataTool";

/// The GitHub repository name.
pub const GITHUB_REPO: &str = "universal-data-tool";

/// The full GitHub repository URL.
pub const GITHUB_URL: &str = "https://github.com/UniversalDataTool/universal-data-tool";

/// Training course landing page.
pub const TRAINING_COURSE_URL: &str = "https://universaldatatool.com/courses";

/// Walkthrough for labeling images with bounding boxes.
pub const LABELING_IMAGES_URL: &str =
    "https://dev.to/seveibar/make-bounding-boxes-for-artificial-intelligence-with-udt-1kai";

/// Project YouTube channel.
pub const YOUTUBE_URL: &str = "https://www.youtube.com/channel/UCgFkrRN7CLt7_iTa2WDjf2g";

/// GitHub releases URL (downloading and installing the desktop app).
pub fn github_releases_url() -> String {
    format!("{}/releases", GITHUB_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));

        assert!(GITHUB_URL.starts_with("https://github.com/"));
        assert!(GITHUB_URL.contains(GITHUB_OWNER));
        assert!(GITHUB_URL.contains(GITHUB_REPO));
    }

    #[test]
    fn test_derived_urls() {
        assert_eq!(github_releases_url(), format!("{}/releases", GITHUB_URL));
    }

    #[test]
    fn test_links_are_https() {
        for url in [TRAINING_COURSE_URL, LABELING_IMAGES_URL, YOUTUBE_URL] {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}
