//! Unified entry point: one tagged input, routed to the right assembler.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{MappedMarket, Platform, RawOutcome};
use crate::error::MappingError;

use super::MarketMapper;

/// A raw market from any platform, tagged with its source.
///
/// ```json
/// { "platform": "sportybet", "market_id": "18", "specifier": "total=2.5",
///   "outcomes": { "12": 1.85, "13": "1.95" } }
/// { "platform": "bet9ja", "odds": { "S_1X2_1": "2.10", "S_1X2_X": "3.20" } }
/// ```
///
/// Outcome maps keep document order, which positional markets depend on.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "platform", rename_all = "snake_case")]
pub enum MarketInput {
    /// A Sportybet market with an optional compound specifier.
    Sportybet {
        market_id: String,
        #[serde(default)]
        specifier: Option<String>,
        outcomes: IndexMap<String, RawOutcome>,
    },
    /// A whole Bet9ja flattened odds map.
    Bet9ja { odds: IndexMap<String, RawOutcome> },
    /// One Bet9ja market whose key has already been split.
    Bet9jaMarket {
        market: String,
        #[serde(default)]
        param: Option<String>,
        outcomes: IndexMap<String, RawOutcome>,
    },
    /// A Betpawa market, for normalization.
    Betpawa {
        market_id: String,
        #[serde(default)]
        param: Option<String>,
        outcomes: IndexMap<String, RawOutcome>,
    },
}

impl MarketInput {
    #[must_use]
    pub const fn platform(&self) -> Platform {
        match self {
            MarketInput::Sportybet { .. } => Platform::Sportybet,
            MarketInput::Bet9ja { .. } | MarketInput::Bet9jaMarket { .. } => Platform::Bet9ja,
            MarketInput::Betpawa { .. } => Platform::Betpawa,
        }
    }
}

/// Result of [`MarketMapper::dispatch`].
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Dispatched {
    Single(MappedMarket),
    Batch(Vec<MappedMarket>),
}

impl Dispatched {
    #[must_use]
    pub fn into_markets(self) -> Vec<MappedMarket> {
        match self {
            Dispatched::Single(market) => vec![market],
            Dispatched::Batch(markets) => markets,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Dispatched::Single(_) => 1,
            Dispatched::Batch(markets) => markets.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MarketMapper<'_> {
    /// Route `input` to its platform's assembler.
    ///
    /// # Errors
    ///
    /// Single-market inputs fail as their assembler does. A Bet9ja odds map
    /// never fails; unmappable entries are left out.
    pub fn dispatch(&self, input: MarketInput) -> Result<Dispatched, MappingError> {
        match input {
            MarketInput::Sportybet {
                market_id,
                specifier,
                outcomes,
            } => self
                .map_sportybet(&market_id, specifier.as_deref(), outcomes)
                .map(Dispatched::Single),
            MarketInput::Bet9ja { odds } => Ok(Dispatched::Batch(self.map_bet9ja_batch(odds))),
            MarketInput::Bet9jaMarket {
                market,
                param,
                outcomes,
            } => self
                .map_bet9ja(&market, param.as_deref(), outcomes)
                .map(Dispatched::Single),
            MarketInput::Betpawa {
                market_id,
                param,
                outcomes,
            } => self
                .map_betpawa(&market_id, param.as_deref(), outcomes)
                .map(Dispatched::Single),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn input(json: &str) -> MarketInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn sportybet_input_routes_to_single() {
        let mapped = MarketMapper::global()
            .dispatch(input(
                r#"{"platform":"sportybet","market_id":"18","specifier":"total=2.5",
                    "outcomes":{"12":1.85,"13":"1.95"}}"#,
            ))
            .unwrap();
        let Dispatched::Single(market) = mapped else {
            panic!("expected a single market");
        };
        assert_eq!(market.canonical_id().as_str(), "over_under_ft");
        assert_eq!(market.line(), Some(2.5));
    }

    #[test]
    fn bet9ja_odds_route_to_batch() {
        let mapped = MarketMapper::global()
            .dispatch(input(
                r#"{"platform":"bet9ja","odds":{"S_1X2_1":"2.10","junk":"1.0","S_DC_1X":1.3}}"#,
            ))
            .unwrap();
        assert!(matches!(mapped, Dispatched::Batch(_)));
        assert_eq!(mapped.len(), 2);
    }

    #[test]
    fn split_bet9ja_market() {
        let mapped = MarketMapper::global()
            .dispatch(input(
                r#"{"platform":"bet9ja_market","market":"OU","param":"2.5",
                    "outcomes":{"O":{"odds":"1.9","active":false}}}"#,
            ))
            .unwrap()
            .into_markets();
        assert_eq!(mapped.len(), 1);
        assert!(!mapped[0].outcomes()[0].is_active());
    }

    #[test]
    fn single_errors_propagate() {
        let err = MarketMapper::global()
            .dispatch(input(r#"{"platform":"betpawa","market_id":"0","outcomes":{}}"#))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownMarket);
    }

    #[test]
    fn unknown_platform_tag_is_rejected() {
        let result = serde_json::from_str::<MarketInput>(r#"{"platform":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn platform_of_input() {
        assert_eq!(
            input(r#"{"platform":"bet9ja","odds":{}}"#).platform(),
            Platform::Bet9ja
        );
    }
}
