//! `config`: show the effective configuration.

use crate::output::{self, OutputFormat};
use folio_core::config::AppConfig;
use folio_core::error::AppError;

/// Execute `config`
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    output::print_item(&config.redacted(), format, |c| format!("{:#?}", c));
    Ok(())
}
