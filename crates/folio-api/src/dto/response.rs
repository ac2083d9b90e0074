//! Response DTOs.

use serde::Serialize;

use folio_service::{ClipboardData, FileItem, RefreshedUrl};

/// Plain `{"success": true}` acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}

impl SuccessResponse {
    /// A successful acknowledgement.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// GET /api/auth/check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    /// Whether the request carries a valid token for the scope.
    pub authenticated: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// GET /api/r2/files
#[derive(Debug, Clone, Serialize)]
pub struct FileListResponse {
    /// Always `true`.
    pub success: bool,
    /// Objects with fresh links.
    pub files: Vec<FileItem>,
    /// Number of items returned.
    pub total: usize,
}

/// POST /api/r2/upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    /// Always `true`.
    pub success: bool,
    /// The stored object.
    pub file: FileItem,
}

/// POST /api/r2/refresh-urls
#[derive(Debug, Clone, Serialize)]
pub struct RefreshUrlsResponse {
    /// Always `true`.
    pub success: bool,
    /// One entry per requested key.
    pub urls: Vec<RefreshedUrl>,
}

/// POST /api/r2/share-link
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinkResponse {
    /// Server-relative download path.
    pub share_link: String,
}

/// 409 body for a stale clipboard write.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardConflictResponse {
    /// Always `true`.
    pub conflict: bool,
    /// What is stored now.
    pub current_data: Option<ClipboardData>,
    /// Human-readable message.
    pub message: String,
}

/// DELETE /api/clip/history/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemRemoved {
    /// Always `true`.
    pub success: bool,
    /// Id of the removed item.
    pub removed_id: String,
}
