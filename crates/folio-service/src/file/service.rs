//! Lists, uploads and deletes objects.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use folio_core::error::AppError;
use folio_core::traits::storage::{StorageObjectMeta, StorageProvider};
use folio_storage::StorageManager;

use crate::share::ShareService;

/// Default and maximum number of keys returned by a listing.
pub const DEFAULT_MAX_KEYS: usize = 1000;

/// An object as presented to the file manager.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    /// Object key.
    pub key: String,
    /// Final segment of the key.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub last_modified: DateTime<Utc>,
    /// MIME type, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Signed 24-hour download path.
    pub url: String,
    /// Upload status shown by the client.
    pub status: &'static str,
}

/// Orchestrates object storage for the file manager.
#[derive(Debug, Clone)]
pub struct FileService {
    storage: Arc<StorageManager>,
    shares: Arc<ShareService>,
    max_upload_size: u64,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        storage: Arc<StorageManager>,
        shares: Arc<ShareService>,
        max_upload_size: u64,
    ) -> Self {
        Self {
            storage,
            shares,
            max_upload_size,
        }
    }

    /// List objects under `prefix`, each with a fresh download link.
    pub async fn list(
        &self,
        prefix: Option<&str>,
        max_keys: usize,
    ) -> Result<Vec<FileItem>, AppError> {
        let max_keys = max_keys.clamp(1, DEFAULT_MAX_KEYS);
        let prefix = prefix.filter(|p| !p.is_empty());
        let objects = self.storage.list(prefix, max_keys).await?;
        Ok(objects.into_iter().map(|meta| self.to_item(meta)).collect())
    }

    /// Store an uploaded file under its own name.
    pub async fn upload(
        &self,
        file_name: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> Result<FileItem, AppError> {
        if file_name.is_empty() {
            return Err(AppError::validation("No file provided"));
        }
        if data.len() as u64 > self.max_upload_size {
            return Err(AppError::validation(format!(
                "File exceeds the maximum upload size of {} bytes",
                self.max_upload_size
            )));
        }

        let content_type = content_type.filter(|ct| !ct.is_empty());
        let meta = self.storage.put(file_name, data, content_type).await?;
        info!(key = %meta.key, size = meta.size_bytes, "Uploaded file");
        Ok(self.to_item(meta))
    }

    /// Delete an object by key.
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        if key.is_empty() {
            return Err(AppError::validation("Missing key"));
        }
        self.storage.delete(key).await?;
        info!(key, "Deleted file");
        Ok(())
    }

    fn to_item(&self, meta: StorageObjectMeta) -> FileItem {
        FileItem {
            name: meta.name().to_string(),
            url: self.shares.listing_url(&meta.key),
            size: meta.size_bytes,
            last_modified: meta.last_modified.unwrap_or_else(Utc::now),
            content_type: meta.content_type,
            key: meta.key,
            status: "uploaded",
        }
    }
}
