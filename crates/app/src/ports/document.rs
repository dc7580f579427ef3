//! Document port: attribute access on the page's root element.

use bstheme_domain::error::ThemeError;

/// Root element of the hosting document (`<html>` in a browser).
///
/// The styling layer watches one presentation attribute on this element to
/// pick its light or dark palette.
pub trait DocumentRoot {
    /// Current value of attribute `name`, or `None` when it is not set.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] if the root element is unreachable.
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError>;

    /// Set attribute `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] if the root element is unreachable
    /// or rejects the attribute.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
}

impl<T: DocumentRoot + ?Sized> DocumentRoot for &T {
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        (**self).attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set_attribute(name, value)
    }
}
