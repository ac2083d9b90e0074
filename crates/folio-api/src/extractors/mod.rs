//! Custom Axum extractors.

pub mod scope;

pub use scope::{FilesScope, RequireScope, ScopeMarker};
