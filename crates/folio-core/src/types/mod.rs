//! Core type definitions used across the Folio workspace.

pub mod response;

pub use response::{ApiErrorResponse, ApiResponse};
