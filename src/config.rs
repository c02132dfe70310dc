//! Configuration management for the application.
//!
//! This module handles loading and validating application configuration in TOML
//! format with platform-specific directory resolution. The start screen only
//! ever reads its configuration; preferences changed on screen (such as the
//! active language) are not written back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::APP_DATA_DIR;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// JSON file listing recently opened documents.
    ///
    /// Falls back to `recent.json` in the config directory when unset.
    pub recent_items: Option<PathBuf>,
}

impl PathConfig {
    /// Resolves the recent-items file, falling back to the config directory.
    pub fn recent_items_file(&self) -> Result<PathBuf> {
        match &self.recent_items {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join("recent.json")),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Language code active when the screen opens (e.g. "en", "fr")
    #[serde(default = "default_language")]
    pub language: String,
    /// Show the "downloading and installing" help link
    #[serde(default = "default_true")]
    pub show_download_link: bool,
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            language: default_language(),
            show_download_link: true,
        }
    }
}

/// Usage analytics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Record which starting template the user picked
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Append events as JSON lines to this file (tracing only when unset)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_file: None,
        }
    }
}

/// Collaborative session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Offer the "open collaborative session" action
    #[serde(default)]
    pub enabled: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/UniversalDataTool/config.toml`
/// - macOS: `~/Library/Application Support/UniversalDataTool/config.toml`
/// - Windows: `%APPDATA%\UniversalDataTool\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Usage analytics
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Collaborative sessions
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/UniversalDataTool/`
    /// - macOS: `~/Library/Application Support/UniversalDataTool/`
    /// - Windows: `%APPDATA%\UniversalDataTool\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Missing files yield the defaults; missing sections or keys are filled in
    /// with their defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `language` is a non-empty code without whitespace
    /// - `analytics.log_file` is not a directory
    pub fn validate(&self) -> Result<()> {
        let language = self.ui.language.trim();
        if language.is_empty() || language.contains(char::is_whitespace) {
            anyhow::bail!("Invalid language code in config: {:?}", self.ui.language);
        }

        if let Some(log_file) = &self.analytics.log_file {
            if log_file.is_dir() {
                anyhow::bail!(
                    "Analytics log file points at a directory: {}",
                    log_file.display()
                );
            }
        }

        Ok(())
    }
}
