//! CLI module graph and entry point.

pub mod command;
pub mod map;
pub mod markets;
pub mod output;
pub mod parse;

use tracing::{debug, info};

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use command::{Cli, Commands};

/// Load configuration, initialize logging and run the selected command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(DEFAULT_CONFIG_PATH)?,
    };
    apply_overrides(&mut config, &cli);
    config.logging.init();

    info!(version = env!("CARGO_PKG_VERSION"), "oddsmap starting");
    debug!(?config, "effective configuration");

    let format = config.output.format;
    match &cli.command {
        Commands::Map(args) => map::execute(args, format),
        Commands::Parse(command) => parse::execute(command, format),
        Commands::Markets(args) => Ok(markets::execute(args, format)?),
    }
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    if cli.json_logs {
        config.logging.format = "json".into();
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::Parser;

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "oddsmap",
            "--log-level",
            "debug",
            "--json-logs",
            "--format",
            "pretty",
            "markets",
        ])
        .unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.output.format, OutputFormat::Pretty);
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["oddsmap", "markets"]).unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config, Config::default());
    }
}
