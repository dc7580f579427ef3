//! # bstheme-domain
//!
//! Pure domain model for the bstheme theme controller.
//!
//! ## Responsibilities
//! - Define the **Theme** value (`dark` / `light`) and its flip rule
//! - Define how raw strings read from the page or the preference store map
//!   onto a theme (lenient for the attribute, exact-match for the store)
//! - Hold the fixed storage key and presentation attribute names
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod theme;
