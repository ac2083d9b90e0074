//! Local filesystem storage provider.
//!
//! Object keys map onto relative paths under a root directory; `/` in a
//! key becomes a directory separator. Content types are derived from the
//! key's extension on every read, so a content type supplied at upload
//! time is not persisted.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::traits::storage::{StorageObjectMeta, StorageProvider, StoredObject};

/// Local filesystem storage provider.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Root directory for all stored objects.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve an object key to a path within the root.
    ///
    /// Keys with empty, `.` or `..` segments are rejected so that no key can
    /// address a file outside the root.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let mut path = self.root.clone();
        for segment in key.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
                return Err(AppError::validation(format!("Invalid object key: {key}")));
            }
            path.push(segment);
        }
        Ok(path)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// Walk the root and collect every regular file as an object.
    async fn walk(&self) -> AppResult<Vec<StorageObjectMeta>> {
        let mut objects = Vec::new();
        let mut pending = vec![(self.root.clone(), String::new())];

        while let Some((dir_path, key_prefix)) = pending.pop() {
            let mut dir = fs::read_dir(&dir_path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to list directory: {}", dir_path.display()),
                    e,
                )
            })?;

            while let Some(entry) = dir.next_entry().await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to read directory entry", e)
            })? {
                let meta = entry.metadata().await.map_err(|e| {
                    AppError::with_source(ErrorKind::Storage, "Failed to get entry metadata", e)
                })?;
                let name = entry.file_name().to_string_lossy().to_string();
                let key = format!("{key_prefix}{name}");

                if meta.is_dir() {
                    pending.push((entry.path(), format!("{key}/")));
                } else if meta.is_file() {
                    objects.push(StorageObjectMeta {
                        content_type: mime_from_key(&key),
                        key,
                        size_bytes: meta.len(),
                        last_modified: meta
                            .modified()
                            .ok()
                            .map(chrono::DateTime::<chrono::Utc>::from),
                    });
                }
            }
        }

        objects.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(objects)
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.is_dir())
    }

    async fn list(
        &self,
        prefix: Option<&str>,
        max_keys: usize,
    ) -> AppResult<Vec<StorageObjectMeta>> {
        let prefix = prefix.unwrap_or("");
        let objects = self
            .walk()
            .await?
            .into_iter()
            .filter(|object| object.key.starts_with(prefix))
            .take(max_keys)
            .collect();
        Ok(objects)
    }

    async fn get(&self, key: &str) -> AppResult<StoredObject> {
        let full_path = self.resolve(key)?;
        let file = fs::File::open(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Object not found: {key}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open object: {key}"),
                    e,
                )
            }
        })?;
        let meta = file.metadata().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to stat object: {key}"), e)
        })?;
        if !meta.is_file() {
            return Err(AppError::not_found(format!("Object not found: {key}")));
        }

        let stream = ReaderStream::new(file);
        Ok(StoredObject {
            body: Box::pin(stream.map(|chunk| chunk.map(Bytes::from))),
            content_type: mime_from_key(key),
            content_length: Some(meta.len()),
        })
    }

    async fn put(
        &self,
        key: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> AppResult<StorageObjectMeta> {
        let full_path = self.resolve(key)?;
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write object: {key}"), e)
        })?;

        debug!(key, bytes = data.len(), "Wrote object");
        Ok(StorageObjectMeta {
            key: key.to_string(),
            size_bytes: data.len() as u64,
            content_type: content_type.map(String::from).or_else(|| mime_from_key(key)),
            last_modified: Some(chrono::Utc::now()),
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_path = self.resolve(key)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(key, "Deleted object");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete object: {key}"),
                e,
            )),
        }
    }
}

/// Guess a MIME type from the key's extension.
fn mime_from_key(key: &str) -> Option<String> {
    mime_guess::from_path(key).first().map(|mime| mime.to_string())
}
