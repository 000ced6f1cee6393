//! Handler for `oddsmap map`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context};
use rust_decimal::Decimal;
use serde::Deserialize;
use tabled::Tabled;
use tracing::{info, warn};

use crate::cli::command::MapArgs;
use crate::cli::output;
use crate::config::OutputFormat;
use crate::domain::{MappedMarket, Platform};
use crate::mapper::{MarketInput, MarketMapper};

/// One tagged market, or several.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Inputs {
    Many(Vec<MarketInput>),
    One(MarketInput),
}

impl Inputs {
    fn into_vec(self) -> Vec<MarketInput> {
        match self {
            Inputs::Many(inputs) => inputs,
            Inputs::One(input) => vec![input],
        }
    }
}

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Source")]
    source: Platform,
    #[tabled(rename = "Param")]
    param: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Betpawa")]
    betpawa: String,
    #[tabled(rename = "Raw")]
    raw: String,
    #[tabled(rename = "Odds")]
    odds: Decimal,
    #[tabled(rename = "Active")]
    active: bool,
}

/// Execute `map`. Fails when any input could not be mapped, after printing
/// the ones that could.
pub fn execute(args: &MapArgs, format: OutputFormat) -> anyhow::Result<()> {
    let raw = read_input(args.input.as_deref())?;
    let inputs: Inputs = serde_json::from_str(&raw).context("input is not a valid market document")?;
    let inputs = inputs.into_vec();

    let mapper = MarketMapper::global();
    let mut markets = Vec::new();
    let mut failures = 0usize;

    for input in inputs {
        match input {
            MarketInput::Bet9ja { odds } => {
                let report = mapper.map_bet9ja_batch_report(odds);
                if report.skipped() > 0 {
                    warn!(
                        mapped = report.markets.len(),
                        skipped = report.skipped(),
                        "bet9ja batch had unmappable entries"
                    );
                }
                if args.report {
                    for key in &report.unparsed_keys {
                        output::warn(&format!("unparsed key '{key}'"));
                    }
                    for failure in &report.failures {
                        output::warn(&format!("{}: {failure}", failure.code()));
                    }
                }
                markets.extend(report.markets);
            }
            single => match mapper.dispatch(single) {
                Ok(mapped) => markets.extend(mapped.into_markets()),
                Err(e) => {
                    output::warn(&format!("{}: {e}", e.code()));
                    failures += 1;
                }
            },
        }
    }

    info!(markets = markets.len(), failures, "mapping finished");
    print_markets(&markets, format)?;

    if failures > 0 {
        bail!("{failures} market(s) could not be mapped");
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_markets(markets: &[MappedMarket], format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        output::json(markets, format)?;
        return Ok(());
    }
    if markets.is_empty() {
        output::note("no markets mapped");
        return Ok(());
    }
    output::table(markets.iter().flat_map(rows));
    Ok(())
}

fn rows(market: &MappedMarket) -> impl Iterator<Item = OutcomeRow> + '_ {
    let param = param_label(market);
    market.outcomes().iter().map(move |o| OutcomeRow {
        market: market.canonical_id().to_string(),
        source: market.source(),
        param: param.clone(),
        outcome: o.canonical_id().to_owned(),
        betpawa: o.betpawa_name().unwrap_or("-").to_owned(),
        raw: o.competitor_outcome().unwrap_or("-").to_owned(),
        odds: o.odds(),
        active: o.is_active(),
    })
}

fn param_label(market: &MappedMarket) -> String {
    if let Some(line) = market.line() {
        return line.to_string();
    }
    if let Some(h) = market.handicap() {
        return format!("{:+}/{:+}", h.home(), h.away());
    }
    String::new()
}
