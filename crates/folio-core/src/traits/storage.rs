//! Object storage trait for pluggable blob backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Object key within the bucket.
    pub key: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type (if known).
    pub content_type: Option<String>,
    /// Last modified timestamp.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

impl StorageObjectMeta {
    /// Final path segment of the key, used as a display and download name.
    pub fn name(&self) -> &str {
        basename(&self.key)
    }
}

/// Final `/`-separated segment of a key, or the key itself when it has none.
pub fn basename(key: &str) -> &str {
    match key.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => key,
    }
}

/// A byte stream type used for reading object contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// An object opened for reading.
pub struct StoredObject {
    /// Object contents.
    pub body: ByteStream,
    /// MIME type reported by the store.
    pub content_type: Option<String>,
    /// Content length reported by the store.
    pub content_length: Option<u64>,
}

impl std::fmt::Debug for StoredObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredObject")
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Trait for object storage backends.
///
/// Implementations exist for the local filesystem and S3-compatible
/// stores. A missing object is reported as an error of kind
/// [`crate::error::ErrorKind::NotFound`].
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// List up to `max_keys` objects whose key starts with `prefix`.
    async fn list(
        &self,
        prefix: Option<&str>,
        max_keys: usize,
    ) -> AppResult<Vec<StorageObjectMeta>>;

    /// Open an object for streaming.
    async fn get(&self, key: &str) -> AppResult<StoredObject>;

    /// Store an object, replacing any existing one with the same key.
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> AppResult<StorageObjectMeta>;

    /// Delete an object. Deleting a missing object is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
