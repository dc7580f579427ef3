//! Store file location and setup.

use std::path::PathBuf;

use crate::error::StorageError;
use crate::json_store::JsonFileStore;

/// Default store file, relative to the working directory.
const DEFAULT_PATH: &str = "bstheme-preferences.json";

/// Configuration for the JSON file storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON store file.
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BSTHEME_STORE_PATH` is not set.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Self::from_vars(|name| std::env::var(name))
    }

    /// Read configuration through `lookup`, called with `BSTHEME_STORE_PATH`.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `lookup`.
    pub fn from_vars(
        lookup: impl Fn(&str) -> Result<String, std::env::VarError>,
    ) -> Result<Self, std::env::VarError> {
        Ok(Self {
            path: PathBuf::from(lookup("BSTHEME_STORE_PATH")?),
        })
    }

    /// Build a [`JsonFileStore`] from this configuration.
    ///
    /// Creates the parent directory if missing. The file itself is only
    /// created by the first write.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn build(self) -> Result<JsonFileStore, StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(JsonFileStore::new(self.path))
    }
}
