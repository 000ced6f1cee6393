//! Canonical output of the mapping engine.

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::CanonicalId;
use super::market::HandicapStyle;
use super::platform::Platform;

/// A handicap attached to a mapped market.
///
/// `away` is always the negation of `home`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MappedHandicap {
    style: HandicapStyle,
    home: f64,
    away: f64,
}

impl MappedHandicap {
    pub(crate) fn new(style: HandicapStyle, home: f64, away: f64) -> Self {
        Self { style, home, away }
    }

    #[must_use]
    pub const fn style(&self) -> HandicapStyle {
        self.style
    }

    #[must_use]
    pub const fn home(&self) -> f64 {
        self.home
    }

    #[must_use]
    pub const fn away(&self) -> f64 {
        self.away
    }
}

/// One priced selection in reference vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedOutcome {
    canonical_id: String,
    betpawa_name: Option<String>,
    competitor_outcome: Option<String>,
    odds: Decimal,
    active: bool,
}

impl MappedOutcome {
    pub(crate) fn new(
        canonical_id: impl Into<String>,
        betpawa_name: Option<String>,
        competitor_outcome: Option<String>,
        odds: Decimal,
        active: bool,
    ) -> Self {
        Self {
            canonical_id: canonical_id.into(),
            betpawa_name,
            competitor_outcome,
            odds,
            active,
        }
    }

    #[must_use]
    pub fn canonical_id(&self) -> &str {
        &self.canonical_id
    }

    /// Outcome name on the reference platform.
    #[must_use]
    pub fn betpawa_name(&self) -> Option<&str> {
        self.betpawa_name.as_deref()
    }

    /// The outcome token as the source competitor sent it.
    #[must_use]
    pub fn competitor_outcome(&self) -> Option<&str> {
        self.competitor_outcome.as_deref()
    }

    #[must_use]
    pub const fn odds(&self) -> Decimal {
        self.odds
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// A market translated into the reference platform's vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedMarket {
    canonical_id: CanonicalId,
    betpawa_market_id: Option<String>,
    betpawa_market_name: String,
    source: Platform,
    competitor_market_id: Option<String>,
    line: Option<f64>,
    handicap: Option<MappedHandicap>,
    outcomes: Vec<MappedOutcome>,
}

impl MappedMarket {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        canonical_id: CanonicalId,
        betpawa_market_id: Option<String>,
        betpawa_market_name: String,
        source: Platform,
        competitor_market_id: Option<String>,
        line: Option<f64>,
        handicap: Option<MappedHandicap>,
        outcomes: Vec<MappedOutcome>,
    ) -> Self {
        Self {
            canonical_id,
            betpawa_market_id,
            betpawa_market_name,
            source,
            competitor_market_id,
            line,
            handicap,
            outcomes,
        }
    }

    #[must_use]
    pub const fn canonical_id(&self) -> &CanonicalId {
        &self.canonical_id
    }

    /// Reference market ID. Absent for markets Betpawa does not offer.
    #[must_use]
    pub fn betpawa_market_id(&self) -> Option<&str> {
        self.betpawa_market_id.as_deref()
    }

    #[must_use]
    pub fn betpawa_market_name(&self) -> &str {
        &self.betpawa_market_name
    }

    /// Platform the raw data came from.
    #[must_use]
    pub const fn source(&self) -> Platform {
        self.source
    }

    /// Market identifier on the source competitor. Absent for reference input.
    #[must_use]
    pub fn competitor_market_id(&self) -> Option<&str> {
        self.competitor_market_id.as_deref()
    }

    #[must_use]
    pub const fn line(&self) -> Option<f64> {
        self.line
    }

    #[must_use]
    pub const fn handicap(&self) -> Option<MappedHandicap> {
        self.handicap
    }

    #[must_use]
    pub fn outcomes(&self) -> &[MappedOutcome] {
        &self.outcomes
    }

    /// Find an outcome by its reference name.
    #[must_use]
    pub fn outcome_named(&self, name: &str) -> Option<&MappedOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.betpawa_name() == Some(name))
    }
}
