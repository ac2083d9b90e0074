//! Scheduled job endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};

use folio_service::KeepaliveReport;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/cron/keepalive (Authorization: Bearer <cron secret>)
pub async fn keepalive(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<KeepaliveReport>> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    state.keepalive_service.authorize(authorization)?;

    Ok(Json(state.keepalive_service.ping().await?))
}
