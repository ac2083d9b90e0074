//! Clipboard records as stored in the key-value store.

use serde::{Deserialize, Serialize};

/// The current clipboard contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardData {
    /// Clipboard text.
    pub content: String,
    /// Last write (milliseconds since epoch).
    pub last_modified: i64,
    /// Incremented on every save; zero means never written.
    pub version: u64,
}

impl ClipboardData {
    /// An empty, version-0 record stamped with `now_ms`.
    pub fn empty(now_ms: i64) -> Self {
        Self {
            content: String::new(),
            last_modified: now_ms,
            version: 0,
        }
    }
}

/// A previous clipboard value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Random identifier.
    pub id: String,
    /// Full content.
    pub content: String,
    /// When the content was replaced (milliseconds since epoch).
    pub timestamp: i64,
    /// Leading characters of the content.
    pub preview: String,
}

/// First `max_chars` characters of `content`.
pub fn preview(content: &str, max_chars: usize) -> String {
    content.chars().take(max_chars).collect()
}
