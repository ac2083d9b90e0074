//! S3-compatible object storage provider (AWS S3, Cloudflare R2, MinIO).

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream as S3ByteStream;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio_util::io::ReaderStream;
use tracing::{debug, info};

use folio_core::config::storage::S3StorageConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::traits::storage::{StorageObjectMeta, StorageProvider, StoredObject};

/// S3-compatible storage provider bound to a single bucket.
#[derive(Debug, Clone)]
pub struct S3StorageProvider {
    client: Client,
    bucket: String,
}

impl S3StorageProvider {
    /// Create a new S3 storage provider.
    ///
    /// Static credentials are used when an access key is configured;
    /// otherwise the default AWS credential chain is consulted.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 bucket is not configured"));
        }

        let mut builder = if config.access_key.is_empty() {
            let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;
            aws_sdk_s3::config::Builder::from(&shared)
        } else {
            aws_sdk_s3::config::Builder::new()
                .behavior_version(BehaviorVersion::latest())
                .credentials_provider(Credentials::new(
                    config.access_key.clone(),
                    config.secret_key.clone(),
                    None,
                    None,
                    "folio-config",
                ))
        };

        builder = builder
            .region(Region::new(config.region.clone()))
            .force_path_style(config.force_path_style);
        if !config.endpoint.is_empty() {
            builder = builder.endpoint_url(config.endpoint.clone());
        }

        info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 storage provider"
        );

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl StorageProvider for S3StorageProvider {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let result = self.client.head_bucket().bucket(&self.bucket).send().await;
        Ok(result.is_ok())
    }

    async fn list(
        &self,
        prefix: Option<&str>,
        max_keys: usize,
    ) -> AppResult<Vec<StorageObjectMeta>> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .set_prefix(prefix.map(String::from))
            .max_keys(i32::try_from(max_keys).unwrap_or(i32::MAX))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    "Failed to list objects",
                    e.into_service_error(),
                )
            })?;

        let objects = output
            .contents()
            .iter()
            .filter_map(|object| {
                let key = object.key()?.to_string();
                Some(StorageObjectMeta {
                    size_bytes: object.size().and_then(|s| u64::try_from(s).ok()).unwrap_or(0),
                    content_type: None,
                    last_modified: object
                        .last_modified()
                        .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
                    key,
                })
            })
            .collect();

        Ok(objects)
    }

    async fn get(&self, key: &str) -> AppResult<StoredObject> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service = e.into_service_error();
                if service.is_no_such_key() {
                    AppError::not_found(format!("Object not found: {key}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to fetch object: {key}"),
                        service,
                    )
                }
            })?;

        let content_type = output.content_type().map(String::from);
        let content_length = output.content_length().and_then(|l| u64::try_from(l).ok());
        let reader = output.body.into_async_read();
        let stream = ReaderStream::new(reader);

        Ok(StoredObject {
            body: Box::pin(stream.map(|chunk| chunk.map(Bytes::from))),
            content_type,
            content_length,
        })
    }

    async fn put(
        &self,
        key: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> AppResult<StorageObjectMeta> {
        let size = data.len() as u64;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .set_content_type(content_type.map(String::from))
            .body(S3ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to upload object: {key}"),
                    e.into_service_error(),
                )
            })?;

        debug!(key, bytes = size, "Uploaded object");
        Ok(StorageObjectMeta {
            key: key.to_string(),
            size_bytes: size,
            content_type: content_type.map(String::from),
            last_modified: Some(chrono::Utc::now()),
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object: {key}"),
                    e.into_service_error(),
                )
            })?;
        debug!(key, "Deleted object");
        Ok(())
    }
}
