//! Preference store port: persistent key-value storage.

use bstheme_domain::error::ThemeError;

/// Origin-scoped string store that survives page reloads.
///
/// Mirrors the browser `localStorage` contract: values are opaque strings and
/// an absent key is not an error.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the backing store is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the write is rejected (quota,
    /// storage disabled, IO failure).
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}
