//! Shared CLI output helpers.
//!
//! Results go to stdout in the configured [`OutputFormat`]; notes and
//! warnings go to stderr so stdout stays machine-readable.

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::config::OutputFormat;

/// Print a serializable result as JSON.
pub fn json<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> serde_json::Result<()> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string(value)?,
    };
    println!("{rendered}");
    Ok(())
}

/// Print rows as a table.
pub fn table<R: Tabled>(rows: impl IntoIterator<Item = R>) {
    println!("{}", Table::new(rows));
}

/// Print a warning status line.
pub fn warn(message: &str) {
    eprintln!("⚠ {message}");
}

/// Print a single-line note.
pub fn note(message: &str) {
    eprintln!("{message}");
}
