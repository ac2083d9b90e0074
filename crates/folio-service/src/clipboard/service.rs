//! Clipboard service backed by the key-value store.
//!
//! The version check and the write are two separate store operations, so
//! two concurrent saves with the same expected version can both succeed.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use folio_cache::provider::CacheManager;
use folio_core::config::ClipboardConfig;
use folio_core::error::AppError;
use folio_core::traits::cache::CacheProvider;

use super::model::{ClipboardData, HistoryItem, preview};

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The new record was stored.
    Saved(ClipboardData),
    /// The caller's expected version is stale; nothing was written.
    Conflict {
        /// What is stored now, if anything.
        current: Option<ClipboardData>,
    },
}

/// Reads and writes the shared clipboard and its history.
#[derive(Debug, Clone)]
pub struct ClipboardService {
    cache: Arc<CacheManager>,
    config: ClipboardConfig,
}

impl ClipboardService {
    /// Creates a new clipboard service.
    pub fn new(cache: Arc<CacheManager>, config: ClipboardConfig) -> Self {
        Self { cache, config }
    }

    /// Current clipboard, or an empty version-0 record.
    pub async fn get(&self) -> Result<ClipboardData, AppError> {
        let data: Option<ClipboardData> = self.cache.get_json(&self.config.key).await?;
        Ok(data.unwrap_or_else(|| ClipboardData::empty(now_ms())))
    }

    /// Store new content, checking `expected_version` when given.
    ///
    /// On success the previous non-empty content is pushed to the front of
    /// the history, which is capped at the configured limit.
    pub async fn save(
        &self,
        content: String,
        expected_version: Option<u64>,
    ) -> Result<SaveOutcome, AppError> {
        let current: Option<ClipboardData> = self.cache.get_json(&self.config.key).await?;
        let current_version = current.as_ref().map_or(0, |c| c.version);

        if expected_version.is_some_and(|v| v != current_version) {
            info!(
                expected = expected_version,
                current = current_version,
                "Clipboard version conflict"
            );
            return Ok(SaveOutcome::Conflict { current });
        }

        let now = now_ms();
        let data = ClipboardData {
            content,
            last_modified: now,
            version: current_version + 1,
        };
        self.cache.set_json(&self.config.key, &data, None).await?;

        if let Some(previous) = current.filter(|c| !c.content.is_empty()) {
            self.push_history(previous.content, now).await?;
        }

        debug!(version = data.version, "Saved clipboard");
        Ok(SaveOutcome::Saved(data))
    }

    /// Remove the clipboard and return an empty record.
    pub async fn clear(&self) -> Result<ClipboardData, AppError> {
        self.cache.delete(&self.config.key).await?;
        Ok(ClipboardData::empty(now_ms()))
    }

    /// History, newest first.
    pub async fn history(&self) -> Result<Vec<HistoryItem>, AppError> {
        let history: Option<Vec<HistoryItem>> =
            self.cache.get_json(&self.config.history_key).await?;
        Ok(history.unwrap_or_default())
    }

    /// Remove the entire history.
    pub async fn clear_history(&self) -> Result<(), AppError> {
        self.cache.delete(&self.config.history_key).await
    }

    /// Remove one history item by id.
    pub async fn delete_history_item(&self, id: &str) -> Result<(), AppError> {
        let mut history = self.history().await?;
        let before = history.len();
        history.retain(|item| item.id != id);
        if history.len() == before {
            return Err(AppError::not_found("History item not found"));
        }
        self.cache
            .set_json(&self.config.history_key, &history, None)
            .await
    }

    async fn push_history(&self, content: String, timestamp: i64) -> Result<(), AppError> {
        let mut history = self.history().await?;
        history.insert(
            0,
            HistoryItem {
                id: Uuid::new_v4().to_string(),
                preview: preview(&content, self.config.preview_chars),
                content,
                timestamp,
            },
        );
        history.truncate(self.config.history_limit);
        self.cache
            .set_json(&self.config.history_key, &history, None)
            .await
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
