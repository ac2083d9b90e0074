//! Share-link creation.

use axum::Json;
use axum::extract::State;

use crate::dto::request::ShareLinkRequest;
use crate::dto::response::ShareLinkResponse;
use crate::error::ApiResult;
use crate::extractors::{FilesScope, RequireScope};
use crate::state::AppState;

/// POST /api/r2/share-link
pub async fn create_share_link(
    State(state): State<AppState>,
    _auth: RequireScope<FilesScope>,
    Json(req): Json<ShareLinkRequest>,
) -> ApiResult<Json<ShareLinkResponse>> {
    let link = state.share_service.create_link(
        req.key.as_deref().unwrap_or_default(),
        req.duration.as_deref().unwrap_or_default(),
    )?;

    Ok(Json(ShareLinkResponse {
        share_link: link.path(),
    }))
}
