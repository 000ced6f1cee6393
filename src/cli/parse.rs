//! Handler for `oddsmap parse`.

use anyhow::anyhow;

use crate::cli::command::ParseCommand;
use crate::cli::output;
use crate::config::OutputFormat;
use crate::parse::{parse_bet9ja_key, parse_specifier};

/// Execute `parse key` / `parse specifier`. Prints the decomposition as
/// JSON, or fails when the grammar rejects the input.
pub fn execute(command: &ParseCommand, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        ParseCommand::Key { raw } => {
            let parsed =
                parse_bet9ja_key(raw).ok_or_else(|| anyhow!("'{raw}' is not a Bet9ja odds key"))?;
            output::json(&parsed, format)?;
        }
        ParseCommand::Specifier { raw } => {
            let parsed = parse_specifier(raw.trim())
                .ok_or_else(|| anyhow!("'{raw}' is empty or too long to be a specifier"))?;
            output::json(&parsed, format)?;
        }
    }
    Ok(())
}
