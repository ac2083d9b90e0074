//! CLI command definitions and dispatch.

pub mod config;
pub mod share;
pub mod token;
pub mod verify;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use folio_core::config::AppConfig;
use folio_core::error::AppError;

/// Folio: mint and check share links and scope tokens offline
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Environment overlay to load (`config/<env>.toml`)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Read a single configuration file instead of the layered defaults
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mint a share link for an object key
    Share(share::ShareArgs),
    /// Check a share link and print the key it grants
    VerifyLink(verify::VerifyLinkArgs),
    /// Mint a scope session token
    Token(token::TokenArgs),
    /// Print the effective configuration with secrets redacted
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Share(args) => share::execute(args, &config, self.format),
            Commands::VerifyLink(args) => verify::execute(args, &config, self.format),
            Commands::Token(args) => token::execute(args, &config, self.format),
            Commands::Config => config::execute(&config, self.format),
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        tracing::debug!(env = %self.env, file = ?self.config, "Loading configuration");
        match &self.config {
            Some(path) => AppConfig::from_file(path),
            None => AppConfig::load(&self.env),
        }
    }
}

/// Render a Unix timestamp in seconds as RFC 3339.
pub(crate) fn rfc3339(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
pub(crate) fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.signing_secret = "cli-signing-secret".into();
    config.auth.share_secret = "cli-share-secret".into();
    config.auth.passwords.files = Some("files-pw".into());
    config
}
