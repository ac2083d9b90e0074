//! # folio-service
//!
//! Business logic service layer for Folio. Each service orchestrates the
//! object store, the key-value store, and the signing primitives to
//! implement one application use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod clipboard;
pub mod file;
pub mod keepalive;
pub mod share;

pub use clipboard::{ClipboardData, ClipboardService, HistoryItem, SaveOutcome};
pub use file::{DownloadResult, DownloadService, FileItem, FileService};
pub use keepalive::{KeepaliveReport, KeepaliveService};
pub use share::{RefreshedUrl, ShareService};
