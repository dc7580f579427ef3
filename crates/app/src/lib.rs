//! # bstheme-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore`: origin-scoped key-value store that survives reloads
//!   - `DocumentRoot`: attribute access on the hosting document's root element
//! - Define the **driving/inbound** use-case:
//!   - `ThemeController`: restore the stored theme at startup, toggle on demand
//! - Load controller configuration (`ThemeConfig`)
//!
//! ## Dependency rule
//! Depends on `bstheme-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod ports;
pub mod services;
