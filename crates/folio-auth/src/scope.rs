//! Protection scopes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use folio_core::error::AppError;

/// Prefix of the cookie that carries a scope's session token.
pub const COOKIE_PREFIX: &str = "auth-token-";

/// A password-protected area of the site.
///
/// Each scope has its own password and its own cookie; a token issued for
/// one scope is never accepted for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScope {
    /// The cloud file manager.
    Files,
    /// The subscription area.
    Mamamiya,
}

impl AuthScope {
    /// Every scope, in declaration order.
    pub const ALL: [AuthScope; 2] = [AuthScope::Files, AuthScope::Mamamiya];

    /// Wire name of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Mamamiya => "mamamiya",
        }
    }

    /// Name of the cookie holding this scope's token.
    pub fn cookie_name(&self) -> String {
        format!("{COOKIE_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for AuthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "files" => Ok(Self::Files),
            "mamamiya" => Ok(Self::Mamamiya),
            _ => Err(AppError::validation("Invalid scope")),
        }
    }
}
