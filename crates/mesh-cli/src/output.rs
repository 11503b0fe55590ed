//! Terminal output for `meshstl`.
//!
//! Text mode prints coloured status lines. JSON mode prints one pretty
//! document per command on stdout and reports warnings on stderr as JSON.

use colored::Colorize;
use serde::Serialize;
use serde_json::json;

use crate::OutputFormat;

/// Print a structured result. Text mode leaves rendering to the caller.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Json {
        return;
    }

    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::warn!("Could not serialize output: {}", e),
    }
}

/// Print a success line.
pub fn success(msg: &str, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Text {
        return;
    }
    println!("{} {}", "✓".green().bold(), msg);
}

/// Print a plain text line.
pub fn info(msg: &str, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Text {
        return;
    }
    println!("{}", msg);
}

/// Print a warning on stderr.
pub fn warning(msg: &str, format: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }

    match format {
        OutputFormat::Text => eprintln!("{} {}", "⚠".yellow().bold(), msg),
        OutputFormat::Json => eprintln!("{}", json!({ "warning": msg })),
    }
}
