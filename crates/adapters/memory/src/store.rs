//! In-memory implementation of [`PreferenceStore`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use bstheme_app::ports::PreferenceStore;
use bstheme_domain::error::ThemeError;

use crate::Poisoned;

/// Map-backed preference store.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, as if a previous page load had stored it.
    #[must_use]
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        self
    }

    /// Copy of every stored entry.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the lock was poisoned.
    pub fn snapshot(&self) -> Result<HashMap<String, String>, ThemeError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, ThemeError> {
        self.entries
            .lock()
            .map_err(|_| ThemeError::Storage(Box::new(Poisoned)))
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        tracing::trace!(key, value, "storing preference in memory");
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_for_missing_key() {
        let store = InMemoryPreferenceStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn should_return_seeded_entry() {
        let store = InMemoryPreferenceStore::new().with_entry("theme", "dark");
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn should_overwrite_existing_value() {
        let store = InMemoryPreferenceStore::new().with_entry("theme", "dark");
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn should_keep_unrelated_entries() {
        let store = InMemoryPreferenceStore::new().with_entry("lang", "pt-BR");
        store.set("theme", "dark").unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["lang"], "pt-BR");
    }
}
