//! `verify-link`: check a share link against the configured share secret.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use folio_auth::{LinkParts, SecretProvider, ShareLinkSigner};
use folio_core::config::AppConfig;
use folio_core::error::AppError;

/// Arguments for `verify-link`
#[derive(Debug, Args)]
pub struct VerifyLinkArgs {
    /// Absolute share URL or `/d/<key>?e=..&s=..` path
    pub link: String,
}

/// What a valid link grants.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReport {
    pub key: String,
    pub expires: i64,
    pub expires_at: String,
}

/// Verify `args.link` as of `now_s`.
pub fn check(
    args: &VerifyLinkArgs,
    config: &AppConfig,
    now_s: i64,
) -> Result<LinkReport, AppError> {
    let parts = LinkParts::parse(&args.link)
        .ok_or_else(|| AppError::validation("Not a share link: expected /d/<key>?e=..&s=.."))?;
    let signer = ShareLinkSigner::new(Arc::new(SecretProvider::from_config(&config.auth)?));

    let key = signer.verify_link_at(parts.encoded_key, parts.expires, parts.signature, now_s)?;
    let expires = parts.expires.parse().unwrap_or_default();

    Ok(LinkReport {
        key,
        expires,
        expires_at: super::rfc3339(expires),
    })
}

/// Execute `verify-link`
pub fn execute(
    args: &VerifyLinkArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let report = check(args, config, chrono::Utc::now().timestamp())?;
    match format {
        OutputFormat::Text => {
            output::print_success("Link is valid");
            println!("{}", output::kv("Key", &report.key));
            println!("{}", output::kv("Expires", &report.expires_at));
        }
        OutputFormat::Json => output::print_item(&report, format, |_| String::new()),
    }
    Ok(())
}
