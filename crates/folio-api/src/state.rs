//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use folio_auth::{ScopeAuthenticator, SecretProvider, ShareLinkSigner};
use folio_cache::CacheManager;
use folio_core::config::AppConfig;
use folio_core::error::AppError;
use folio_service::{
    ClipboardService, DownloadService, FileService, KeepaliveService, ShareService,
};
use folio_storage::StorageManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// Key-value store (Redis or in-memory)
    pub cache: Arc<CacheManager>,
    /// Object store (local or S3-compatible)
    pub storage: Arc<StorageManager>,

    // ── Auth ─────────────────────────────────────────────────
    /// Scope password login and token validation
    pub authenticator: Arc<ScopeAuthenticator>,
    /// Share-link signing and verification
    pub signer: Arc<ShareLinkSigner>,

    // ── Services ─────────────────────────────────────────────
    /// File manager
    pub file_service: Arc<FileService>,
    /// Share-link minting
    pub share_service: Arc<ShareService>,
    /// Public downloads through share links
    pub download_service: Arc<DownloadService>,
    /// Shared clipboard
    pub clipboard_service: Arc<ClipboardService>,
    /// Scheduled keepalive
    pub keepalive_service: Arc<KeepaliveService>,
}

impl AppState {
    /// Wire every service from configuration and the two stores.
    ///
    /// Fails when a signing secret is missing.
    pub fn new(
        config: AppConfig,
        storage: Arc<StorageManager>,
        cache: Arc<CacheManager>,
    ) -> Result<Self, AppError> {
        let secrets = Arc::new(SecretProvider::from_config(&config.auth)?);
        let authenticator = Arc::new(ScopeAuthenticator::new(
            Arc::clone(&secrets),
            config.is_production(),
        ));
        let signer = Arc::new(ShareLinkSigner::new(Arc::clone(&secrets)));

        let share_service = Arc::new(ShareService::new(Arc::clone(&signer)));
        let file_service = Arc::new(FileService::new(
            Arc::clone(&storage),
            Arc::clone(&share_service),
            config.storage.max_upload_size_bytes,
        ));
        let download_service = Arc::new(DownloadService::new(
            Arc::clone(&storage),
            Arc::clone(&signer),
        ));
        let clipboard_service = Arc::new(ClipboardService::new(
            Arc::clone(&cache),
            config.clipboard.clone(),
        ));
        let keepalive_service = Arc::new(KeepaliveService::new(
            Arc::clone(&cache),
            config.clipboard.key.clone(),
            config.cron.secret.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            cache,
            storage,
            authenticator,
            signer,
            file_service,
            share_service,
            download_service,
            clipboard_service,
            keepalive_service,
        })
    }
}
