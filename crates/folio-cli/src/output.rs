//! Text and JSON output formatting for CLI commands.

use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Print a single item in the selected format.
///
/// `text` renders the human-readable form; JSON output serializes `item`.
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat, text: impl FnOnce(&T) -> String) {
    match format {
        OutputFormat::Text => println!("{}", text(item)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Format a key-value pair
pub fn kv(key: &str, value: &str) -> String {
    format!("  {:<12} {}", format!("{}:", key), value)
}
