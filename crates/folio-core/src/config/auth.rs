//! Scope password and signing secret configuration.

use serde::{Deserialize, Serialize};

use super::redact;

/// Secrets consumed by scope authentication and share-link signing.
///
/// Signing secrets are required; scope passwords are optional so that a
/// deployment can leave a scope disabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC-SHA256 key for scope session tokens.
    #[serde(default)]
    pub signing_secret: String,
    /// HMAC-SHA256 key for share-link signatures.
    #[serde(default)]
    pub share_secret: String,
    /// Per-scope passwords.
    #[serde(default)]
    pub passwords: ScopePasswords,
}

/// One password per protection scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopePasswords {
    /// Password for the file manager.
    #[serde(default)]
    pub files: Option<String>,
    /// Password for the subscription area.
    #[serde(default)]
    pub mamamiya: Option<String>,
}

impl AuthConfig {
    /// Returns a copy with every secret replaced by a placeholder.
    pub fn redacted(&self) -> Self {
        Self {
            signing_secret: redact(&self.signing_secret),
            share_secret: redact(&self.share_secret),
            passwords: ScopePasswords {
                files: self.passwords.files.as_deref().map(redact),
                mamamiya: self.passwords.mamamiya.as_deref().map(redact),
            },
        }
    }
}
