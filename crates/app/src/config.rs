//! Controller configuration: TOML file with environment variable overrides.
//!
//! Native hosts look for `bstheme.toml` in the working directory. Every
//! field defaults to the names the page styling expects, so the file is
//! optional. Environment variables take precedence over file values.
//! The browser build uses [`ThemeConfig::default`] directly.

use std::path::Path;

use bstheme_domain::theme::{STORAGE_KEY, THEME_ATTRIBUTE};
use serde::Deserialize;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "bstheme.toml";

/// Names used by [`ThemeController`](crate::services::theme_controller::ThemeController).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the preference is persisted under.
    pub storage_key: String,
    /// Attribute set on the document root.
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            attribute: THEME_ATTRIBUTE.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Load configuration from `bstheme.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// resulting name is empty.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(CONFIG_FILE, |name| std::env::var(name).ok())
    }

    /// Load configuration from `path`, then apply overrides resolved by
    /// `lookup` (called with `BSTHEME_STORAGE_KEY` and `BSTHEME_ATTRIBUTE`).
    ///
    /// # Errors
    ///
    /// Same as [`ThemeConfig::load`].
    pub fn load_with(
        path: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Io`] for any read failure other than a missing file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("BSTHEME_STORAGE_KEY") {
            self.storage_key = val;
        }
        if let Some(val) = lookup("BSTHEME_ATTRIBUTE") {
            self.attribute = val;
        }
    }

    /// Reject empty names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Validation(
                "storage_key must not be empty".to_string(),
            ));
        }
        if self.attribute.is_empty() {
            return Err(ConfigError::Validation(
                "attribute must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
