//! Catalog listing.

use serde::Serialize;
use tabled::Tabled;

use crate::cli::command::MarketsArgs;
use crate::cli::output;
use crate::config::OutputFormat;
use crate::domain::{MarketMapping, OutcomeShape};
use crate::registry::registry;

#[derive(Tabled, Serialize)]
struct MarketRow {
    #[tabled(rename = "Canonical")]
    canonical: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Betpawa")]
    betpawa: String,
    #[tabled(rename = "Sportybet")]
    sportybet: String,
    #[tabled(rename = "Bet9ja")]
    bet9ja: String,
    #[tabled(rename = "Param")]
    param: &'static str,
    #[tabled(rename = "Outcomes")]
    outcomes: String,
}

impl From<&MarketMapping> for MarketRow {
    fn from(m: &MarketMapping) -> Self {
        let dash = |id: Option<&str>| id.unwrap_or("-").to_owned();
        let shape = match m.shape() {
            OutcomeShape::Named => "named",
            OutcomeShape::Positional => "positional",
        };
        Self {
            canonical: m.canonical_id().to_string(),
            name: m.name().to_owned(),
            betpawa: dash(m.betpawa_id()),
            sportybet: dash(m.sportybet_id()),
            bet9ja: dash(m.bet9ja_key()),
            param: m.param().label(),
            outcomes: format!("{} {shape}", m.outcome_count()),
        }
    }
}

/// Execute `markets`.
pub fn execute(args: &MarketsArgs, format: OutputFormat) -> serde_json::Result<()> {
    let registry = registry();
    let rows: Vec<MarketRow> = match args.platform {
        Some(platform) => registry.offered_by(platform).map(MarketRow::from).collect(),
        None => registry.markets().iter().map(MarketRow::from).collect(),
    };

    match format {
        OutputFormat::Table => {
            let count = rows.len();
            output::table(rows);
            output::note(&format!("{count} market(s)"));
        }
        OutputFormat::Json | OutputFormat::Pretty => output::json(&rows, format)?,
    }
    Ok(())
}
