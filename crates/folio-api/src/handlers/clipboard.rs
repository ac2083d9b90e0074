//! Shared clipboard handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use folio_core::error::AppError;
use folio_service::{ClipboardData, HistoryItem, SaveOutcome};

use crate::dto::request::SaveClipboardRequest;
use crate::dto::response::{ClipboardConflictResponse, HistoryItemRemoved, SuccessResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/clip
pub async fn get_clipboard(State(state): State<AppState>) -> ApiResult<Json<ClipboardData>> {
    Ok(Json(state.clipboard_service.get().await?))
}

/// POST /api/clip
pub async fn save_clipboard(
    State(state): State<AppState>,
    Json(req): Json<SaveClipboardRequest>,
) -> ApiResult<Response> {
    let Some(serde_json::Value::String(content)) = req.content else {
        return Err(AppError::validation("Content must be a string").into());
    };

    let response = match state
        .clipboard_service
        .save(content, req.expected_version)
        .await?
    {
        SaveOutcome::Saved(data) => Json(data).into_response(),
        SaveOutcome::Conflict { current } => (
            StatusCode::CONFLICT,
            Json(ClipboardConflictResponse {
                conflict: true,
                current_data: current,
                message: "Content was modified by another user".to_string(),
            }),
        )
            .into_response(),
    };
    Ok(response)
}

/// DELETE /api/clip
pub async fn clear_clipboard(State(state): State<AppState>) -> ApiResult<Json<ClipboardData>> {
    Ok(Json(state.clipboard_service.clear().await?))
}

/// GET /api/clip/history
pub async fn get_history(State(state): State<AppState>) -> ApiResult<Json<Vec<HistoryItem>>> {
    Ok(Json(state.clipboard_service.history().await?))
}

/// DELETE /api/clip/history
pub async fn clear_history(State(state): State<AppState>) -> ApiResult<Json<SuccessResponse>> {
    state.clipboard_service.clear_history().await?;
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/clip/history/{id}
pub async fn delete_history_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<HistoryItemRemoved>> {
    state.clipboard_service.delete_history_item(&id).await?;
    Ok(Json(HistoryItemRemoved {
        success: true,
        removed_id: id,
    }))
}
