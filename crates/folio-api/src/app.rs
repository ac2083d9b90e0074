//! Wires router, middleware and state into an Axum app and serves it.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tracing::{error, info, warn};

use folio_cache::CacheManager;
use folio_core::config::AppConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::traits::cache::CacheProvider;
use folio_core::traits::storage::StorageProvider;
use folio_storage::StorageManager;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Folio server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(environment = %config.environment, "Starting Folio server...");

    // ── Step 1: Initialize key-value store ──────────────────────
    info!(provider = %config.cache.provider, "Initializing key-value store");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);
    if !cache.health_check().await.unwrap_or(false) {
        warn!("Key-value store health check failed; continuing");
    }

    // ── Step 2: Initialize object storage ───────────────────────
    info!(provider = %config.storage.provider, "Initializing object storage");
    let storage = Arc::new(StorageManager::new(&config.storage).await?);
    if !storage.health_check().await.unwrap_or(false) {
        warn!("Object storage health check failed; continuing");
    }

    // ── Step 3: Secrets, signers, services ──────────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, storage, cache)?;

    // ── Step 4: Build and start HTTP server ─────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    info!("Folio server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(());
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => return flatten_server_result(result),
        () = shutdown_signal() => {}
    }

    // Stop accepting and give in-flight requests the grace period to finish.
    let _ = shutdown_tx.send(());
    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => flatten_server_result(result)?,
        Err(_) => {
            warn!(grace_seconds = grace.as_secs(), "Graceful shutdown timed out; aborting");
            server.abort();
        }
    }

    info!("Folio server stopped");
    Ok(())
}

fn flatten_server_result(
    result: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(AppError::with_source(ErrorKind::Internal, "Server error", e)),
        Err(e) => Err(AppError::with_source(ErrorKind::Internal, "Server task failed", e)),
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
