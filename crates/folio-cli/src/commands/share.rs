//! `share`: mint a share link without going through the HTTP API.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use folio_auth::{SecretProvider, ShareDuration, ShareLinkSigner};
use folio_core::config::AppConfig;
use folio_core::error::AppError;

/// Arguments for `share`
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Object key to link to
    #[arg(short, long)]
    pub key: String,

    /// Link lifetime: 24h, 7d, 30d or 1y
    #[arg(short, long, default_value = "7d")]
    pub duration: String,

    /// Origin to prefix the link with (defaults to `server.public_base_url`)
    #[arg(long)]
    pub base_url: Option<String>,
}

/// A freshly minted link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintedLink {
    pub key: String,
    pub link: String,
    pub duration: &'static str,
    pub expires: i64,
    pub expires_at: String,
}

/// Sign a link to `args.key` as of `now_s`.
pub fn mint(args: &ShareArgs, config: &AppConfig, now_s: i64) -> Result<MintedLink, AppError> {
    if args.key.is_empty() {
        return Err(AppError::validation("Key must not be empty"));
    }
    let duration: ShareDuration = args.duration.parse()?;
    let signer = ShareLinkSigner::new(Arc::new(SecretProvider::from_config(&config.auth)?));
    let share = signer.generate_link_at(&args.key, duration.as_secs(), now_s);

    let base = args
        .base_url
        .as_deref()
        .unwrap_or(&config.server.public_base_url);
    let link = if base.is_empty() {
        share.path()
    } else {
        share.url(base)
    };

    Ok(MintedLink {
        key: args.key.clone(),
        link,
        duration: duration.label(),
        expires: share.expires,
        expires_at: super::rfc3339(share.expires),
    })
}

/// Execute `share`
pub fn execute(args: &ShareArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let minted = mint(args, config, chrono::Utc::now().timestamp())?;
    output::print_item(&minted, format, |m| {
        [
            m.link.clone(),
            output::kv("Key", &m.key),
            output::kv("Valid for", m.duration),
            output::kv("Expires", &m.expires_at),
        ]
        .join("\n")
    });
    Ok(())
}
