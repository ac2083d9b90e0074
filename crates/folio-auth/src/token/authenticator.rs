//! Scope password authentication with stateless signed tokens.
//!
//! A token is `b64url(JSON payload) + "." + b64url(HMAC-SHA256)`, with the
//! MAC computed over the encoded payload exactly as it appears on the wire.
//! Verification never fails loudly: malformed, forged, expired and
//! wrong-scope tokens all collapse to `false`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, warn};

use folio_core::error::AppError;

use super::cookie::AuthCookie;
use super::payload::TokenPayload;
use crate::scope::AuthScope;
use crate::secrets::SecretProvider;
use crate::signing::{b64url_decode, b64url_encode, constant_time_eq, hmac_sha256};

/// Token lifetime in milliseconds (24 hours).
pub const TOKEN_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Outcome of a route guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthResult {
    /// The request carries a valid token for the scope.
    Authenticated,
    /// The token is missing, malformed, forged, expired or for another scope.
    Unauthorized,
}

impl AuthResult {
    /// Whether the caller may proceed.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Issues and validates scope session tokens.
#[derive(Debug, Clone)]
pub struct ScopeAuthenticator {
    secrets: Arc<SecretProvider>,
    secure_cookies: bool,
}

impl ScopeAuthenticator {
    /// Create an authenticator. `secure_cookies` adds the `Secure` cookie attribute.
    pub fn new(secrets: Arc<SecretProvider>, secure_cookies: bool) -> Self {
        Self {
            secrets,
            secure_cookies,
        }
    }

    /// Issue a token for `scope` valid for 24 hours from now.
    pub fn issue_token(&self, scope: AuthScope) -> String {
        self.issue_token_at(scope, Utc::now().timestamp_millis())
    }

    /// Issue a token for `scope` as if the current time were `now_ms`.
    pub fn issue_token_at(&self, scope: AuthScope, now_ms: i64) -> String {
        let payload = TokenPayload::issued_at(scope, now_ms);
        // Serializing a two-field struct of an enum and an integer cannot fail.
        let json = serde_json::to_vec(&payload).unwrap_or_default();
        let encoded = b64url_encode(json);
        let signature = self.sign(&encoded);
        format!("{encoded}.{signature}")
    }

    /// Check a token for `scope` against the current time.
    pub fn verify_token(&self, token: &str, scope: AuthScope) -> bool {
        self.verify_token_at(token, scope, Utc::now().timestamp_millis())
    }

    /// Check a token for `scope` as if the current time were `now_ms`.
    pub fn verify_token_at(&self, token: &str, scope: AuthScope, now_ms: i64) -> bool {
        self.decode_at(token, now_ms)
            .is_some_and(|payload| payload.scope == scope)
    }

    /// Guard check over the raw cookie value, if the request carried one.
    pub fn require_auth(&self, scope: AuthScope, cookie_value: Option<&str>) -> AuthResult {
        match cookie_value {
            Some(token) if self.verify_token(token, scope) => AuthResult::Authenticated,
            Some(_) => {
                debug!(%scope, "Rejected invalid scope token");
                AuthResult::Unauthorized
            }
            None => AuthResult::Unauthorized,
        }
    }

    /// Check `password` for `scope` and return a cookie carrying a fresh token.
    pub fn login(&self, scope: AuthScope, password: &str) -> Result<AuthCookie, AppError> {
        let Some(expected) = self.secrets.password_for(scope) else {
            error!(%scope, "No password configured for scope");
            return Err(AppError::configuration("Authentication is not configured"));
        };

        if !constant_time_eq(password.as_bytes(), expected.as_bytes()) {
            warn!(%scope, "Failed login attempt");
            return Err(AppError::authentication("Invalid password"));
        }

        debug!(%scope, "Scope login succeeded");
        Ok(AuthCookie::session(
            scope,
            self.issue_token(scope),
            self.secure_cookies,
        ))
    }

    /// Cookie that clears the scope's token.
    pub fn logout_cookie(&self, scope: AuthScope) -> AuthCookie {
        AuthCookie::cleared(scope, self.secure_cookies)
    }

    /// Signature part of a token: b64url of the MAC over the encoded payload.
    fn sign(&self, encoded_payload: &str) -> String {
        b64url_encode(hmac_sha256(
            self.secrets.signing_secret(),
            encoded_payload.as_bytes(),
        ))
    }

    /// Verify the signature and expiry, returning the payload when valid.
    fn decode_at(&self, token: &str, now_ms: i64) -> Option<TokenPayload> {
        let mut parts = token.split('.');
        let (encoded, signature) = match (parts.next(), parts.next(), parts.next()) {
            (Some(p), Some(s), None) if !p.is_empty() && !s.is_empty() => (p, s),
            _ => return None,
        };

        // Compared as text so only the canonical unpadded encoding matches.
        let expected = self.sign(encoded);
        if !constant_time_eq(signature.as_bytes(), expected.as_bytes()) {
            return None;
        }

        let json = b64url_decode(encoded)?;
        let payload: TokenPayload = serde_json::from_slice(&json).ok()?;
        if payload.is_expired_at(now_ms) {
            return None;
        }
        Some(payload)
    }
}
