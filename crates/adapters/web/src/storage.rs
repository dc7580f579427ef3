//! `window.localStorage` implementation of [`PreferenceStore`].

use bstheme_app::ports::PreferenceStore;
use bstheme_domain::error::ThemeError;

use crate::error::WebError;

/// The origin's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    #[must_use]
    pub fn new(storage: web_sys::Storage) -> Self {
        Self { storage }
    }

    /// Look up `localStorage` on the global window.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::NoWindow`] outside a window context, and
    /// [`WebError::StorageUnavailable`] when storage is disabled.
    pub fn from_window() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let storage = window
            .local_storage()
            .map_err(|err| WebError::from_js(&err))?
            .ok_or(WebError::StorageUnavailable)?;
        Ok(Self::new(storage))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|err| WebError::from_js(&err).into_storage())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| WebError::from_js(&err).into_storage())
    }
}
