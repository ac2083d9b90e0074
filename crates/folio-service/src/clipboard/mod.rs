//! Shared clipboard with optimistic versioning and history.

pub mod model;
pub mod service;

pub use model::{ClipboardData, HistoryItem};
pub use service::{ClipboardService, SaveOutcome};
