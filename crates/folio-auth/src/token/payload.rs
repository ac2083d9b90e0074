//! Token payload embedded in every scope session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::authenticator::TOKEN_TTL_MS;
use crate::scope::AuthScope;

/// Claims carried by a scope session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Scope the bearer authenticated for.
    pub scope: AuthScope,
    /// Expiration timestamp (milliseconds since epoch).
    pub exp: i64,
}

impl TokenPayload {
    /// Claims for `scope` issued at `now_ms`, expiring one TTL later.
    pub fn issued_at(scope: AuthScope, now_ms: i64) -> Self {
        Self {
            scope,
            exp: now_ms.saturating_add(TOKEN_TTL_MS),
        }
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.exp)
    }

    /// Whether the token is expired at `now_ms`. Expiry is exclusive.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.exp
    }
}
