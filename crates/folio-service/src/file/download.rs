//! Streams an object addressed by a signed share link.

use std::sync::Arc;

use tracing::{debug, warn};

use folio_auth::link::ShareLinkSigner;
use folio_core::error::AppError;
use folio_core::traits::storage::{ByteStream, StorageProvider, basename};
use folio_storage::StorageManager;

/// Content type used when the store reports none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Filename used when the key has no usable final segment.
pub const FALLBACK_FILENAME: &str = "download";

/// An opened object ready to stream to the client.
pub struct DownloadResult {
    /// Verified object key.
    pub key: String,
    /// Suggested filename for Content-Disposition.
    pub filename: String,
    /// MIME type for Content-Type.
    pub content_type: String,
    /// Length for Content-Length, when known.
    pub content_length: Option<u64>,
    /// Object contents.
    pub body: ByteStream,
}

impl std::fmt::Debug for DownloadResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadResult")
            .field("key", &self.key)
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Resolves share links to object streams. Requires no session.
#[derive(Debug, Clone)]
pub struct DownloadService {
    storage: Arc<StorageManager>,
    signer: Arc<ShareLinkSigner>,
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(storage: Arc<StorageManager>, signer: Arc<ShareLinkSigner>) -> Self {
        Self { storage, signer }
    }

    /// Verify the link parameters and open the object they address.
    pub async fn download_shared(
        &self,
        encoded_key: &str,
        expires: &str,
        signature: &str,
    ) -> Result<DownloadResult, AppError> {
        let key = self
            .signer
            .verify_link(encoded_key, expires, signature)
            .map_err(|e| {
                warn!(encoded_key, expires, reason = %e, "Rejected share link");
                AppError::from(e)
            })?;

        let object = self.storage.get(&key).await.map_err(|e| {
            if e.is_not_found() {
                AppError::not_found("File not found")
            } else {
                e
            }
        })?;

        let filename = match basename(&key) {
            "" => FALLBACK_FILENAME.to_string(),
            name => name.to_string(),
        };
        debug!(key = %key, "Serving shared download");

        Ok(DownloadResult {
            filename,
            content_type: object
                .content_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            content_length: object.content_length,
            body: object.body,
            key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use folio_auth::SecretProvider;
    use folio_core::config::AuthConfig;
    use folio_core::error::ErrorKind;
    use folio_storage::providers::LocalStorageProvider;
    use futures::StreamExt;

    async fn setup(
        dir: &tempfile::TempDir,
    ) -> (DownloadService, Arc<ShareLinkSigner>, Arc<StorageManager>) {
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        let storage = Arc::new(StorageManager::from_provider(Arc::new(provider)));
        let config = AuthConfig {
            signing_secret: "a".into(),
            share_secret: "b".into(),
            ..AuthConfig::default()
        };
        let secrets = Arc::new(SecretProvider::from_config(&config).unwrap());
        let signer = Arc::new(ShareLinkSigner::new(secrets));
        (
            DownloadService::new(storage.clone(), signer.clone()),
            signer,
            storage,
        )
    }

    #[tokio::test]
    async fn test_download_valid_link() {
        let dir = tempfile::tempdir().unwrap();
        let (service, signer, storage) = setup(&dir).await;
        storage
            .put("folder/a b.txt", Bytes::from("contents"), None)
            .await
            .unwrap();

        let link = signer.generate_link("folder/a b.txt", 60);
        let result = service
            .download_shared(&link.encoded_key, &link.expires.to_string(), &link.signature)
            .await
            .unwrap();

        assert_eq!(result.key, "folder/a b.txt");
        assert_eq!(result.filename, "a b.txt");
        assert_eq!(result.content_type, "text/plain");
        assert_eq!(result.content_length, Some(8));

        let chunks: Vec<_> = result.body.collect().await;
        let body: Vec<u8> = chunks.into_iter().flat_map(|c| c.unwrap().to_vec()).collect();
        assert_eq!(body, b"contents");
    }

    #[tokio::test]
    async fn test_unknown_extension_defaults_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let (service, signer, storage) = setup(&dir).await;
        storage.put("blob", Bytes::from("x"), None).await.unwrap();

        let link = signer.generate_link("blob", 60);
        let result = service
            .download_shared(&link.encoded_key, &link.expires.to_string(), &link.signature)
            .await
            .unwrap();
        assert_eq!(result.content_type, DEFAULT_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_missing_object() {
        let dir = tempfile::tempdir().unwrap();
        let (service, signer, _) = setup(&dir).await;

        let link = signer.generate_link("nope.txt", 60);
        let err = service
            .download_shared(&link.encoded_key, &link.expires.to_string(), &link.signature)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "File not found");
    }

    #[tokio::test]
    async fn test_rejected_links_map_to_error_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let (service, signer, _) = setup(&dir).await;

        let link = signer.generate_link_at("a.txt", 60, 1000);
        let err = service
            .download_shared(&link.encoded_key, &link.expires.to_string(), &link.signature)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Gone);
        assert_eq!(err.message, "Link expired");

        let err = service
            .download_shared(&link.encoded_key, "9999999999", &link.signature)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, "Invalid signature");
    }
}
