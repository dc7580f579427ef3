//! JSON file implementation of [`PreferenceStore`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use bstheme_app::ports::PreferenceStore;
use bstheme_domain::error::ThemeError;
use serde_json::{Map, Value};

use crate::error::StorageError;

type Entries = Map<String, Value>;

/// Preference store persisted as a JSON object in one file.
///
/// Every call goes to disk, so several stores pointing at the same file see
/// each other's writes. Concurrent writers are last-writer-wins.
///
/// Entries that are not JSON strings read as absent and are written back
/// untouched; only a file whose top level is not an object is an error.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over `path`. Use [`Config::build`](crate::Config::build)
    /// to also create the parent directory.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Entries, StorageError> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_slice(&content).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, entries: &Entries) -> Result<(), StorageError> {
        let content = serde_json::to_vec_pretty(entries).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.tmp_path();
        std::fs::write(&tmp, content).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("store"), ToOwned::to_owned);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let entries = self.read()?;
        Ok(entries.get(key).and_then(Value::as_str).map(ToOwned::to_owned))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write(&entries)?;
        tracing::debug!(path = %self.path.display(), key, value, "preference written");
        Ok(())
    }
}
