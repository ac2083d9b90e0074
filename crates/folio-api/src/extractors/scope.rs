//! `RequireScope` admits a request only with a valid scope cookie.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use folio_auth::{AuthResult, AuthScope};
use folio_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Type-level name of a protection scope.
pub trait ScopeMarker: Send + Sync + 'static {
    /// The scope this marker stands for.
    const SCOPE: AuthScope;
}

/// Marker for the file manager scope.
#[derive(Debug, Clone, Copy)]
pub struct FilesScope;

impl ScopeMarker for FilesScope {
    const SCOPE: AuthScope = AuthScope::Files;
}

/// Proof that the request carried a valid token for scope `S`.
///
/// Rejects with 401 `{"success":false,"error":"Unauthorized"}` otherwise.
#[derive(Debug, Clone, Copy)]
pub struct RequireScope<S: ScopeMarker>(PhantomData<S>);

impl<S: ScopeMarker> RequireScope<S> {
    /// The scope that was checked.
    pub fn scope(&self) -> AuthScope {
        S::SCOPE
    }
}

impl<S: ScopeMarker> FromRequestParts<AppState> for RequireScope<S> {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(&S::SCOPE.cookie_name()).map(|c| c.value());

        match state.authenticator.require_auth(S::SCOPE, token) {
            AuthResult::Authenticated => Ok(Self(PhantomData)),
            AuthResult::Unauthorized => Err(AppError::authentication("Unauthorized").into()),
        }
    }
}
