//! Route definitions for the Folio HTTP API.
//!
//! JSON routes are organized by domain and mounted under `/api`; the public
//! share-link download lives at `/d/{key}`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Multipart framing rides on top of the file itself.
    let body_limit = usize::try_from(state.config.storage.max_upload_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    // Only JSON routes are compressed; `/d/{key}` keeps its Content-Length.
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(file_routes())
        .merge(clipboard_routes())
        .merge(cron_routes())
        .merge(health_routes())
        .layer(CompressionLayer::new());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(download_routes())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(timeout_layer(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Requests running past `timeout` are answered with 408.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Scope login, check, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/verify", post(handlers::auth::verify))
        .route("/auth/check", get(handlers::auth::check))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// File manager (guarded by the `files` scope)
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/r2/files", get(handlers::file::list_files))
        .route("/r2/files/{key}", delete(handlers::file::delete_file))
        .route("/r2/upload", post(handlers::file::upload_file))
        .route("/r2/refresh-urls", post(handlers::file::refresh_urls))
        .route("/r2/share-link", post(handlers::share::create_share_link))
}

/// Shared clipboard
fn clipboard_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clip",
            get(handlers::clipboard::get_clipboard)
                .post(handlers::clipboard::save_clipboard)
                .delete(handlers::clipboard::clear_clipboard),
        )
        .route(
            "/clip/history",
            get(handlers::clipboard::get_history).delete(handlers::clipboard::clear_history),
        )
        .route(
            "/clip/history/{id}",
            delete(handlers::clipboard::delete_history_item),
        )
}

/// Scheduled jobs
fn cron_routes() -> Router<AppState> {
    Router::new().route("/cron/keepalive", get(handlers::cron::keepalive))
}

/// Health
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Public share-link download
fn download_routes() -> Router<AppState> {
    Router::new().route("/d/{key}", get(handlers::download::download_shared))
}
