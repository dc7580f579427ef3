//! `document.documentElement` implementation of [`DocumentRoot`].

use bstheme_app::ports::DocumentRoot;
use bstheme_domain::error::ThemeError;

use crate::error::WebError;

/// The page's `<html>` element.
#[derive(Debug, Clone)]
pub struct DocumentElement {
    element: web_sys::Element,
}

impl DocumentElement {
    #[must_use]
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }

    /// Look up the root element of the global window's document.
    ///
    /// # Errors
    ///
    /// Returns a [`WebError`] naming whichever of window, document, or root
    /// element is missing.
    pub fn from_window() -> Result<Self, WebError> {
        let element = web_sys::window()
            .ok_or(WebError::NoWindow)?
            .document()
            .ok_or(WebError::NoDocument)?
            .document_element()
            .ok_or(WebError::NoDocumentElement)?;
        Ok(Self::new(element))
    }
}

impl DocumentRoot for DocumentElement {
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.element.get_attribute(name))
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element
            .set_attribute(name, value)
            .map_err(|err| WebError::from_js(&err).into_document())
    }
}
