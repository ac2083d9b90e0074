//! # folio-storage
//!
//! Object storage provider implementations for Folio. Supports the local
//! filesystem (development and tests) and S3-compatible object stores
//! such as Cloudflare R2.

pub mod manager;
pub mod providers;

pub use manager::StorageManager;
