//! Scope authentication handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use folio_auth::{AuthCookie, AuthScope};
use folio_core::error::AppError;

use crate::dto::request::{CheckQuery, LogoutRequest, VerifyRequest};
use crate::dto::response::{CheckResponse, SuccessResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/auth/verify
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> ApiResult<impl IntoResponse> {
    let (Some(password), Some(scope)) = (req.password, req.scope) else {
        return Err(AppError::validation("Password and scope are required").into());
    };
    if password.is_empty() || scope.is_empty() {
        return Err(AppError::validation("Password and scope are required").into());
    }

    let scope: AuthScope = scope.parse()?;
    let cookie = state.authenticator.login(scope, &password)?;

    Ok((
        CookieJar::new().add(to_cookie(cookie)),
        Json(SuccessResponse::ok()),
    ))
}

/// Render a scope cookie as an `HttpOnly`, `SameSite=Strict` cookie on `/`.
fn to_cookie(cookie: AuthCookie) -> Cookie<'static> {
    Cookie::build((cookie.name, cookie.value))
        .path("/")
        .max_age(time::Duration::seconds(cookie.max_age))
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(cookie.secure)
        .build()
}

/// GET /api/auth/check?scope=...
///
/// Unknown or missing scopes report `false` rather than an error.
pub async fn check(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CheckQuery>,
) -> Json<CheckResponse> {
    let authenticated = query
        .scope
        .as_deref()
        .and_then(|s| s.parse::<AuthScope>().ok())
        .is_some_and(|scope| {
            let token = jar.get(&scope.cookie_name()).map(|c| c.value());
            state
                .authenticator
                .require_auth(scope, token)
                .is_authenticated()
        });

    Json(CheckResponse { authenticated })
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<LogoutRequest>,
) -> ApiResult<impl IntoResponse> {
    let scope: AuthScope = req.scope.as_deref().unwrap_or_default().parse()?;
    let cookie = state.authenticator.logout_cookie(scope);

    Ok((
        CookieJar::new().add(to_cookie(cookie)),
        Json(SuccessResponse::ok()),
    ))
}
