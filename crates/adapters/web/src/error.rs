//! Browser-specific error type.
//!
//! `JsValue` is neither `Send` nor `Sync`, so JavaScript exceptions are
//! flattened to their message before they cross into [`ThemeError`].

use bstheme_domain::error::ThemeError;
use wasm_bindgen::JsValue;

/// Errors originating from the browser environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    /// Not running in a window context (e.g. inside a worker).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no root element.
    #[error("document has no root element")]
    NoDocumentElement,

    /// `localStorage` is disabled or blocked for this origin.
    #[error("localStorage is unavailable")]
    StorageUnavailable,

    /// A DOM or storage call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl WebError {
    /// Capture a thrown JavaScript value.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }

    pub(crate) fn into_storage(self) -> ThemeError {
        ThemeError::Storage(Box::new(self))
    }

    pub(crate) fn into_document(self) -> ThemeError {
        ThemeError::Document(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn should_describe_missing_storage() {
        assert_eq!(
            WebError::StorageUnavailable.to_string(),
            "localStorage is unavailable"
        );
    }

    #[test]
    fn should_wrap_as_storage_error() {
        let err = WebError::Js("QuotaExceededError".to_string()).into_storage();
        assert!(matches!(err, ThemeError::Storage(_)));
        assert_eq!(
            err.source().unwrap().to_string(),
            "javascript error: QuotaExceededError"
        );
    }

    #[test]
    fn should_wrap_as_document_error() {
        let err = WebError::NoDocumentElement.into_document();
        assert!(matches!(err, ThemeError::Document(_)));
    }
}
