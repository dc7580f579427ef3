//! # bstheme-adapter-memory
//!
//! Process-local implementations of the `bstheme-app` ports.
//!
//! ## Responsibilities
//! - `InMemoryPreferenceStore`: `PreferenceStore` backed by a map
//! - `InMemoryDocument`: `DocumentRoot` backed by an attribute map
//!
//! Nothing here survives the process. Use these to drive the controller in
//! tests or to render server-side without a browser.
//!
//! ## Dependency rule
//! Depends on `bstheme-app` (for port traits) and `bstheme-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod document;
mod store;

pub use document::InMemoryDocument;
pub use store::InMemoryPreferenceStore;

/// Error returned when a mutex guarding adapter state was poisoned.
#[derive(Debug, thiserror::Error)]
#[error("in-memory state lock poisoned")]
pub struct Poisoned;
