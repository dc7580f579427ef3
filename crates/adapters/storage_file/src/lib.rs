//! # bstheme-adapter-storage-file
//!
//! Preference persistence in a single JSON file, the native counterpart of
//! the browser's `localStorage`.
//!
//! ## Responsibilities
//! - Implement the `PreferenceStore` port defined in `bstheme-app::ports`
//! - Own the on-disk layout: one JSON object mapping keys to string values
//! - Create the parent directory on first use
//!
//! ## Dependency rule
//! Depends on `bstheme-app` (for port traits) and `bstheme-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod config;
mod error;
mod json_store;

pub use config::Config;
pub use error::StorageError;
pub use json_store::JsonFileStore;
