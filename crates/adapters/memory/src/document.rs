//! In-memory implementation of [`DocumentRoot`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use bstheme_app::ports::DocumentRoot;
use bstheme_domain::error::ThemeError;

use crate::Poisoned;

/// Attribute map standing in for the page's `<html>` element.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    attributes: Mutex<HashMap<String, String>>,
}

impl InMemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an attribute, as if the markup had set it.
    #[must_use]
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut attributes) = self.attributes.lock() {
            attributes.insert(name.into(), value.into());
        }
        self
    }

    /// Drop attribute `name`, returning its previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] if the lock was poisoned.
    pub fn remove_attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.lock()?.remove(name))
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, ThemeError> {
        self.attributes
            .lock()
            .map_err(|_| ThemeError::Document(Box::new(Poisoned)))
    }
}

impl DocumentRoot for InMemoryDocument {
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.lock()?.get(name).cloned())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.lock()?.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
