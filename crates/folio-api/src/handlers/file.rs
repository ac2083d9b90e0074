//! File manager handlers. Every route requires the `files` scope.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};

use folio_core::error::AppError;
use folio_service::file::service::DEFAULT_MAX_KEYS;

use crate::dto::request::{ListFilesQuery, RefreshUrlsRequest};
use crate::dto::response::{
    FileListResponse, RefreshUrlsResponse, SuccessResponse, UploadResponse,
};
use crate::error::ApiResult;
use crate::extractors::{FilesScope, RequireScope};
use crate::state::AppState;

/// GET /api/r2/files?prefix=&maxKeys=
pub async fn list_files(
    State(state): State<AppState>,
    _auth: RequireScope<FilesScope>,
    Query(query): Query<ListFilesQuery>,
) -> ApiResult<Json<FileListResponse>> {
    let files = state
        .file_service
        .list(
            query.prefix.as_deref(),
            query.max_keys.unwrap_or(DEFAULT_MAX_KEYS),
        )
        .await?;

    Ok(Json(FileListResponse {
        success: true,
        total: files.len(),
        files,
    }))
}

/// POST /api/r2/upload (multipart, field `file`)
pub async fn upload_file(
    State(state): State<AppState>,
    _auth: RequireScope<FilesScope>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(String::from);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

        let file = state
            .file_service
            .upload(&file_name, data, content_type.as_deref())
            .await?;
        return Ok(Json(UploadResponse {
            success: true,
            file,
        }));
    }

    Err(AppError::validation("No file provided").into())
}

/// DELETE /api/r2/files/{key}
pub async fn delete_file(
    State(state): State<AppState>,
    _auth: RequireScope<FilesScope>,
    Path(key): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    state.file_service.delete(&key).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/r2/refresh-urls
pub async fn refresh_urls(
    State(state): State<AppState>,
    _auth: RequireScope<FilesScope>,
    Json(req): Json<RefreshUrlsRequest>,
) -> ApiResult<Json<RefreshUrlsResponse>> {
    let keys = req
        .keys
        .ok_or_else(|| AppError::validation("Invalid keys provided"))?;

    Ok(Json(RefreshUrlsResponse {
        success: true,
        urls: state.share_service.refresh_urls(&keys),
    }))
}
