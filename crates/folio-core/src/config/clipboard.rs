//! Shared clipboard and keepalive configuration.

use serde::{Deserialize, Serialize};

/// Shared clipboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Key holding the current clipboard record.
    #[serde(default = "default_key")]
    pub key: String,
    /// Key holding the history list.
    #[serde(default = "default_history_key")]
    pub history_key: String,
    /// Maximum number of history entries retained.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Number of characters kept in a history preview.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            history_key: default_history_key(),
            history_limit: default_history_limit(),
            preview_chars: default_preview_chars(),
        }
    }
}

/// Scheduled keepalive configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CronConfig {
    /// Bearer secret expected from the scheduler.
    #[serde(default)]
    pub secret: Option<String>,
}

fn default_key() -> String {
    "global:clipboard".to_string()
}

fn default_history_key() -> String {
    "global:clipboard:history".to_string()
}

fn default_history_limit() -> usize {
    50
}

fn default_preview_chars() -> usize {
    100
}
