//! Storage-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use bstheme_domain::error::ThemeError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading, writing, or renaming the store file failed.
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but its top level is not a JSON object.
    #[error("malformed store file {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StorageError> for ThemeError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
