//! Bet9ja market assembly, single and batch.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::domain::{MappedMarket, Platform, RawOutcome};
use crate::error::MappingError;
use crate::parse::parse_bet9ja_key;

use super::param::token_param;
use super::{collect_outcomes, MarketMapper};

const PLATFORM: Platform = Platform::Bet9ja;

/// Outcome of a batch run: what mapped, and what was skipped and why.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub markets: Vec<MappedMarket>,
    /// Keys that do not follow the `S_<MARKET>[@<PARAM>]_<OUTCOME>` grammar.
    pub unparsed_keys: Vec<String>,
    /// Market groups that parsed but could not be mapped.
    #[serde(serialize_with = "serialize_failures")]
    pub failures: Vec<MappingError>,
}

impl BatchReport {
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.unparsed_keys.len() + self.failures.len()
    }
}

fn serialize_failures<S>(failures: &[MappingError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;

    #[derive(Serialize)]
    struct Failure<'a> {
        code: &'static str,
        market: &'a str,
        message: String,
    }

    let mut seq = serializer.serialize_seq(Some(failures.len()))?;
    for failure in failures {
        seq.serialize_element(&Failure {
            code: failure.code().as_str(),
            market: failure.market(),
            message: failure.to_string(),
        })?;
    }
    seq.end()
}

impl MarketMapper<'_> {
    /// Map one Bet9ja market given its market token, optional `@` parameter,
    /// and outcome suffixes with their prices.
    ///
    /// # Errors
    ///
    /// - `UNKNOWN_MARKET` if the market token is not in the registry
    /// - `INVALID_SPECIFIER` if a required parameter is missing or malformed
    /// - `UNKNOWN_PARAM_MARKET` if a parameter is given for a fixed market
    /// - `NO_MATCHING_OUTCOMES` if no outcome could be paired
    pub fn map_bet9ja<I, K, V>(
        &self,
        market: &str,
        param: Option<&str>,
        outcomes: I,
    ) -> Result<MappedMarket, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawOutcome>,
    {
        let market = market.trim();
        let mapping = self.lookup(PLATFORM, market)?;
        let param = token_param(mapping, PLATFORM, market, param)?;
        self.assemble(mapping, PLATFORM, market, &param, &collect_outcomes(outcomes))
    }

    /// Map a whole flattened odds map. Keys are grouped by market and
    /// parameter; every group that maps becomes one market, in order of
    /// first appearance. Everything else is skipped.
    pub fn map_bet9ja_batch<I, K, V>(&self, odds: I) -> Vec<MappedMarket>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RawOutcome>,
    {
        self.map_bet9ja_batch_report(odds).markets
    }

    /// Like [`map_bet9ja_batch`](Self::map_bet9ja_batch), but keeps track of
    /// what was skipped.
    pub fn map_bet9ja_batch_report<I, K, V>(&self, odds: I) -> BatchReport
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RawOutcome>,
    {
        let mut report = BatchReport::default();
        let mut groups: IndexMap<(String, Option<String>), Vec<(String, RawOutcome)>> =
            IndexMap::new();

        for (key, price) in odds {
            let key = key.as_ref();
            let Some(parsed) = parse_bet9ja_key(key) else {
                debug!(key, "skipping malformed bet9ja key");
                report.unparsed_keys.push(key.to_owned());
                continue;
            };
            groups
                .entry((parsed.market, parsed.param))
                .or_default()
                .push((parsed.outcome, price.into()));
        }

        for ((market, param), outcomes) in groups {
            match self.map_bet9ja(&market, param.as_deref(), outcomes) {
                Ok(mapped) => report.markets.push(mapped),
                Err(e) => {
                    debug!(
                        market = %market,
                        param = param.as_deref(),
                        code = %e.code(),
                        error = %e,
                        "skipping bet9ja market"
                    );
                    report.failures.push(e);
                }
            }
        }

        report
    }
}
