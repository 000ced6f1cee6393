//! Command-line interface definitions.
//!
//! Defines the CLI structure for the oddsmap binary using `clap`. Every
//! subcommand is a thin layer over the library: mapping raw markets,
//! inspecting the parsers, and listing the catalog.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;
use crate::domain::Platform;

/// Normalize sportsbook markets into the reference vocabulary
#[derive(Parser, Debug)]
#[command(name = "oddsmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to ./oddsmap.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Override output format [json, pretty, table]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map raw platform markets (JSON) into reference markets
    Map(MapArgs),

    /// Run one of the platform parsers on a raw string
    #[command(subcommand)]
    Parse(ParseCommand),

    /// List the market catalog
    Markets(MarketsArgs),
}

/// Arguments for the `map` subcommand.
#[derive(Parser, Debug)]
pub struct MapArgs {
    /// Input file with one tagged market or an array of them (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print keys and markets a Bet9ja batch skipped to stderr
    #[arg(long)]
    pub report: bool,
}

/// Subcommands for `oddsmap parse`
#[derive(Subcommand, Debug)]
pub enum ParseCommand {
    /// Decompose a Bet9ja flattened key such as S_OU@2.5_O
    Key {
        /// The raw key
        raw: String,
    },
    /// Decompose a Sportybet specifier such as total=2.5|hcp=0:1
    Specifier {
        /// The raw specifier
        raw: String,
    },
}

/// Arguments for the `markets` subcommand.
#[derive(Parser, Debug)]
pub struct MarketsArgs {
    /// Only markets offered by this platform
    #[arg(short, long)]
    pub platform: Option<Platform>,
}
