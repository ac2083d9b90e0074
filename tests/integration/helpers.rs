//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use bytes::Bytes;
use http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::AppState;
use folio_auth::AuthScope;
use folio_cache::CacheManager;
use folio_cache::memory::MemoryCacheProvider;
use folio_core::config::AppConfig;
use folio_core::traits::storage::StorageProvider;
use folio_storage::StorageManager;
use folio_storage::providers::LocalStorageProvider;

pub const FILES_PASSWORD: &str = "files-password";
pub const CRON_SECRET: &str = "cron-secret";

const MULTIPART_BOUNDARY: &str = "folio-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Wired state, for reaching services and signers directly
    pub state: AppState,
    /// Backing directory of the local object store
    _objects: TempDir,
}

/// Configuration used by every test app.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.environment = "test".into();
    config.auth.signing_secret = "integration-signing-secret".into();
    config.auth.share_secret = "integration-share-secret".into();
    config.auth.passwords.files = Some(FILES_PASSWORD.into());
    config.cron.secret = Some(CRON_SECRET.into());
    config.storage.max_upload_size_bytes = 1024 * 1024;
    config
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application after adjusting the default test config
    pub async fn with_config(customize: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = test_config();
        customize(&mut config);

        let objects = tempfile::tempdir().expect("Failed to create temp dir");
        config.storage.local.root_path = objects.path().to_string_lossy().into_owned();

        let provider = LocalStorageProvider::new(&config.storage.local.root_path)
            .await
            .expect("Failed to init storage");
        let storage = Arc::new(StorageManager::from_provider(Arc::new(provider)));
        let cache = Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&config.cache.memory),
        )));

        let state = AppState::new(config, storage, cache).expect("Failed to build state");
        let router = folio_api::build_app(state.clone());

        Self {
            router,
            state,
            _objects: objects,
        }
    }

    /// Log in to `files` and return the `Cookie` header value
    pub async fn login_files(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/verify",
                Some(serde_json::json!({ "password": FILES_PASSWORD, "scope": "files" })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "Login failed: {:?}", response.body);

        let set_cookie = response
            .header(header::SET_COOKIE)
            .expect("No Set-Cookie in login response");
        let pair = set_cookie.split(';').next().unwrap_or_default();
        assert!(pair.starts_with(&AuthScope::Files.cookie_name()));
        pair.to_string()
    }

    /// Store an object directly, bypassing the API
    pub async fn put_object(&self, key: &str, data: &'static [u8]) {
        self.state
            .storage
            .put(key, Bytes::from_static(data), None)
            .await
            .expect("Failed to store object");
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        self.send(req.body(Body::from(body_str)).expect("Failed to build request"))
            .await
    }

    /// Upload `data` as the multipart `file` field
    pub async fn upload(&self, file_name: &str, data: &[u8], cookie: Option<&str>) -> TestResponse {
        let mut body = format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/plain\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

        let mut req = Request::builder()
            .method("POST")
            .uri("/api/r2/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            );
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        self.send(req.body(Body::from(body)).expect("Failed to build request"))
            .await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            bytes,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub bytes: Bytes,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
}

impl TestResponse {
    /// A header value as a string
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `error` field of a JSON error body
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
