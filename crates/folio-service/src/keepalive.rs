//! Scheduled keepalive ping for the key-value store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

use folio_auth::signing::constant_time_eq;
use folio_cache::provider::CacheManager;
use folio_core::error::AppError;
use folio_core::traits::cache::CacheProvider;

/// Result of a keepalive ping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepaliveReport {
    /// Always `true` on success.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// When the ping ran.
    pub timestamp: DateTime<Utc>,
    /// Whether the clipboard key currently holds a value.
    pub has_data: bool,
}

/// Reads the clipboard key so that an idle hosted store stays active.
#[derive(Debug, Clone)]
pub struct KeepaliveService {
    cache: Arc<CacheManager>,
    clipboard_key: String,
    secret: Option<String>,
}

impl KeepaliveService {
    /// Creates a new keepalive service. `secret` is the expected bearer token.
    pub fn new(cache: Arc<CacheManager>, clipboard_key: String, secret: Option<String>) -> Self {
        Self {
            cache,
            clipboard_key,
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// Check an `Authorization` header value against `Bearer <secret>`.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<(), AppError> {
        let Some(secret) = self.secret.as_deref() else {
            error!("Keepalive called but cron.secret is not configured");
            return Err(AppError::configuration("Keepalive is not configured"));
        };

        let presented = authorization
            .and_then(|h| h.strip_prefix("Bearer "))
            .unwrap_or_default();
        if presented.is_empty() || !constant_time_eq(presented.as_bytes(), secret.as_bytes()) {
            return Err(AppError::authentication("Unauthorized"));
        }
        Ok(())
    }

    /// Read the clipboard key and report whether it holds data.
    pub async fn ping(&self) -> Result<KeepaliveReport, AppError> {
        let has_data = self.cache.exists(&self.clipboard_key).await?;
        let timestamp = Utc::now();
        info!(%timestamp, has_data, "Keepalive ping successful");

        Ok(KeepaliveReport {
            success: true,
            message: "Keepalive ping successful".to_string(),
            timestamp,
            has_data,
        })
    }
}
