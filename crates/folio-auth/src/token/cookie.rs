//! The cookie that carries a scope session token.

use crate::scope::AuthScope;

/// Lifetime of an auth cookie in seconds (24 hours).
pub const COOKIE_MAX_AGE_SECONDS: i64 = 86_400;

/// A `Set-Cookie` instruction for a scope token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCookie {
    /// Cookie name, `auth-token-<scope>`.
    pub name: String,
    /// Token, or empty when clearing.
    pub value: String,
    /// `Max-Age` in seconds; zero clears the cookie.
    pub max_age: i64,
    /// Whether to add the `Secure` attribute.
    pub secure: bool,
}

impl AuthCookie {
    /// Cookie carrying a freshly issued token.
    pub fn session(scope: AuthScope, token: String, secure: bool) -> Self {
        Self {
            name: scope.cookie_name(),
            value: token,
            max_age: COOKIE_MAX_AGE_SECONDS,
            secure,
        }
    }

    /// Cookie that removes the scope's token from the client.
    pub fn cleared(scope: AuthScope, secure: bool) -> Self {
        Self {
            name: scope.cookie_name(),
            value: String::new(),
            max_age: 0,
            secure,
        }
    }
}
