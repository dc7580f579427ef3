//! Common error types used across the workspace.
//!
//! Each adapter defines its own typed error and converts it into
//! [`ThemeError`] via `From`, boxing the source so the domain never depends
//! on adapter crates.

/// Boxed adapter error carried by [`ThemeError`].
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Base error for every theme operation.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The persistent preference store failed to read or write.
    #[error("preference store error")]
    Storage(#[source] BoxedError),

    /// The hosting document could not be read or mutated.
    #[error("document error")]
    Document(#[source] BoxedError),
}

/// Returned when a string is neither `"dark"` nor `"light"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {value:?}")]
pub struct ParseThemeError {
    pub value: String,
}
