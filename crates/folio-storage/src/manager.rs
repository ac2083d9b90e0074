//! Storage manager that dispatches to the configured object store.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::info;

use folio_core::config::storage::StorageConfig;
use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_core::traits::storage::{StorageObjectMeta, StorageProvider, StoredObject};

/// Wraps the object store selected by configuration.
#[derive(Debug, Clone)]
pub struct StorageManager {
    inner: Arc<dyn StorageProvider>,
}

impl StorageManager {
    /// Build the provider named by `config.provider`.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let inner: Arc<dyn StorageProvider> = match config.provider.as_str() {
            #[cfg(feature = "local")]
            "local" => {
                info!(root = %config.local.root_path, "Initializing local storage provider");
                let provider =
                    crate::providers::LocalStorageProvider::new(&config.local.root_path).await?;
                Arc::new(provider)
            }
            #[cfg(feature = "s3")]
            "s3" | "r2" => Arc::new(crate::providers::S3StorageProvider::new(&config.s3).await?),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: '{other}'. Supported: local, s3"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn StorageProvider>) -> Self {
        Self { inner: provider }
    }
}

#[async_trait]
impl StorageProvider for StorageManager {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    async fn list(
        &self,
        prefix: Option<&str>,
        max_keys: usize,
    ) -> AppResult<Vec<StorageObjectMeta>> {
        self.inner.list(prefix, max_keys).await
    }

    async fn get(&self, key: &str) -> AppResult<StoredObject> {
        self.inner.get(key).await
    }

    async fn put(
        &self,
        key: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> AppResult<StorageObjectMeta> {
        self.inner.put(key, data, content_type).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }
}
