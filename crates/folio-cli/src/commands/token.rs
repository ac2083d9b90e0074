//! `token`: mint a scope session token for debugging a deployment.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use folio_auth::{AuthScope, ScopeAuthenticator, SecretProvider, TokenPayload};
use folio_core::config::AppConfig;
use folio_core::error::AppError;

/// Arguments for `token`
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Scope to mint the token for (`files` or `mamamiya`)
    #[arg(short, long)]
    pub scope: String,
}

/// A minted token and the cookie it belongs in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintedToken {
    pub scope: AuthScope,
    pub cookie: String,
    pub token: String,
    pub expires_at: String,
}

/// Issue a token for `args.scope` as of `now_ms`.
pub fn mint(args: &TokenArgs, config: &AppConfig, now_ms: i64) -> Result<MintedToken, AppError> {
    let scope: AuthScope = args.scope.parse()?;
    let authenticator = ScopeAuthenticator::new(
        Arc::new(SecretProvider::from_config(&config.auth)?),
        config.is_production(),
    );

    let expires_at = TokenPayload::issued_at(scope, now_ms)
        .expires_at()
        .map(|t| t.to_rfc3339())
        .unwrap_or_default();

    Ok(MintedToken {
        scope,
        cookie: scope.cookie_name(),
        token: authenticator.issue_token_at(scope, now_ms),
        expires_at,
    })
}

/// Execute `token`
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let minted = mint(args, config, chrono::Utc::now().timestamp_millis())?;
    output::print_item(&minted, format, |m| {
        [
            format!("{}={}", m.cookie, m.token),
            output::kv("Expires", &m.expires_at),
        ]
        .join("\n")
    });
    Ok(())
}
