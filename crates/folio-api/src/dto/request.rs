//! Request DTOs.
//!
//! Fields the client may omit are `Option` so that handlers can answer
//! with a specific validation message instead of a generic rejection.

use serde::Deserialize;

/// POST /api/auth/verify
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    /// Scope password.
    #[serde(default)]
    pub password: Option<String>,
    /// Scope name.
    #[serde(default)]
    pub scope: Option<String>,
}

/// POST /api/auth/logout
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutRequest {
    /// Scope name.
    #[serde(default)]
    pub scope: Option<String>,
}

/// GET /api/auth/check
#[derive(Debug, Clone, Deserialize)]
pub struct CheckQuery {
    /// Scope name.
    #[serde(default)]
    pub scope: Option<String>,
}

/// GET /api/r2/files
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesQuery {
    /// Key prefix filter.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Maximum number of keys.
    #[serde(default)]
    pub max_keys: Option<usize>,
}

/// POST /api/r2/refresh-urls
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshUrlsRequest {
    /// Keys needing fresh links.
    #[serde(default)]
    pub keys: Option<Vec<String>>,
}

/// POST /api/r2/share-link
#[derive(Debug, Clone, Deserialize)]
pub struct ShareLinkRequest {
    /// Object key.
    #[serde(default)]
    pub key: Option<String>,
    /// Duration label (`24h`, `7d`, `30d`, `1y`).
    #[serde(default)]
    pub duration: Option<String>,
}

/// GET /d/{key}
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadQuery {
    /// Expiry (Unix seconds).
    #[serde(default)]
    pub e: Option<String>,
    /// Signature.
    #[serde(default)]
    pub s: Option<String>,
}

/// POST /api/clip
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveClipboardRequest {
    /// New content; anything but a string is rejected.
    #[serde(default)]
    pub content: Option<serde_json::Value>,
    /// Version the client last saw.
    #[serde(default)]
    pub expected_version: Option<u64>,
}
