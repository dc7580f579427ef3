//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Every port is synchronous: the hosting page runs on a single thread and
//! neither storage nor attribute access suspends.

pub mod document;
pub mod preference_store;

pub use document::DocumentRoot;
pub use preference_store::PreferenceStore;
