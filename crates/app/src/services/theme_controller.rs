//! Theme controller: restores and toggles the page theme.

use bstheme_domain::error::ThemeError;
use bstheme_domain::theme::Theme;

use crate::config::ThemeConfig;
use crate::ports::{DocumentRoot, PreferenceStore};

/// Keeps the document's presentation attribute and the persisted preference
/// in step.
///
/// Both operations run synchronously on the caller's thread. Nothing is
/// retried or rolled back: a failing port aborts the operation with `?` and
/// whatever already happened stays applied.
pub struct ThemeController<S, D> {
    store: S,
    document: D,
    config: ThemeConfig,
}

impl<S: PreferenceStore, D: DocumentRoot> ThemeController<S, D> {
    /// Create a controller using the default key and attribute names.
    pub fn new(store: S, document: D) -> Self {
        Self::with_config(store, document, ThemeConfig::default())
    }

    pub fn with_config(store: S, document: D, config: ThemeConfig) -> Self {
        Self {
            store,
            document,
            config,
        }
    }

    /// Re-apply a persisted dark preference to the document.
    ///
    /// Only a stored `"dark"` has an effect. A stored `"light"`, a missing
    /// entry, or an unrecognised value leaves the attribute exactly as the
    /// markup set it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the store cannot be read, or
    /// [`ThemeError::Document`] if the attribute cannot be set.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&self) -> Result<(), ThemeError> {
        let stored = self.store.get(&self.config.storage_key)?;
        match Theme::from_stored(stored.as_deref()) {
            Some(theme) => {
                self.document
                    .set_attribute(&self.config.attribute, theme.as_str())?;
                tracing::debug!(%theme, "restored stored theme");
            }
            None => {
                tracing::debug!(?stored, "no stored dark preference, keeping markup default");
            }
        }
        Ok(())
    }

    /// Flip the theme shown by the document and persist the new value.
    ///
    /// The attribute is written first, then the store. Any current value
    /// other than `"dark"`, including no attribute at all, counts as light.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] if the attribute cannot be read or
    /// written, or [`ThemeError::Storage`] if persisting fails. A storage
    /// failure leaves the new attribute in place.
    #[tracing::instrument(skip(self))]
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let next = self.current()?.toggled();
        self.document
            .set_attribute(&self.config.attribute, next.as_str())?;
        self.store.set(&self.config.storage_key, next.as_str())?;
        tracing::info!(theme = %next, "theme toggled");
        Ok(next)
    }

    /// Theme the document currently shows.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] if the attribute cannot be read.
    pub fn current(&self) -> Result<Theme, ThemeError> {
        let value = self.document.attribute(&self.config.attribute)?;
        Ok(Theme::from_attribute(value.as_deref()))
    }

    /// Persisted preference, or `None` when absent or not a known theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the store cannot be read.
    pub fn stored(&self) -> Result<Option<Theme>, ThemeError> {
        let value = self.store.get(&self.config.storage_key)?;
        Ok(value.and_then(|raw| raw.parse().ok()))
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Give back the injected adapters.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.document)
    }
}
