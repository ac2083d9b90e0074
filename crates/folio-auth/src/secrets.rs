//! Secrets consumed by the signing primitives.

use std::fmt;

use folio_core::config::AuthConfig;
use folio_core::error::AppError;

use crate::scope::AuthScope;

/// Signing secrets and scope passwords, injected at construction.
///
/// Built once at startup from [`AuthConfig`]. Empty signing secrets are
/// rejected here so that a misconfigured deployment fails before serving.
/// Scope passwords stay optional and are checked per request.
#[derive(Clone)]
pub struct SecretProvider {
    signing_secret: Vec<u8>,
    share_secret: Vec<u8>,
    files_password: Option<String>,
    mamamiya_password: Option<String>,
}

impl SecretProvider {
    /// Build the provider from configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        if config.signing_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.signing_secret must be set to a non-empty value",
            ));
        }
        if config.share_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.share_secret must be set to a non-empty value",
            ));
        }

        Ok(Self {
            signing_secret: config.signing_secret.as_bytes().to_vec(),
            share_secret: config.share_secret.as_bytes().to_vec(),
            files_password: config.passwords.files.clone().filter(|p| !p.is_empty()),
            mamamiya_password: config.passwords.mamamiya.clone().filter(|p| !p.is_empty()),
        })
    }

    /// Key for scope session tokens.
    pub fn signing_secret(&self) -> &[u8] {
        &self.signing_secret
    }

    /// Key for share-link signatures.
    pub fn share_secret(&self) -> &[u8] {
        &self.share_secret
    }

    /// Configured password for a scope, if any.
    pub fn password_for(&self, scope: AuthScope) -> Option<&str> {
        match scope {
            AuthScope::Files => self.files_password.as_deref(),
            AuthScope::Mamamiya => self.mamamiya_password.as_deref(),
        }
    }
}

impl fmt::Debug for SecretProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretProvider")
            .field("signing_secret", &"<redacted>")
            .field("share_secret", &"<redacted>")
            .field("files_password", &self.files_password.as_ref().map(|_| "<redacted>"))
            .field("mamamiya_password", &self.mamamiya_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
