//! Market mapping definitions.
//!
//! - [`MarketMapping`] - One market as it appears on every platform
//! - [`OutcomeMapping`] - One selection within a market, per platform
//! - [`ParamKind`] - Which parameter a market is keyed by (line, handicap, variant)
//! - [`OutcomeShape`] - Whether outcomes match by name or by position

use serde::Serialize;

use super::id::CanonicalId;
use super::platform::Platform;

/// The two textual handicap conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandicapStyle {
    /// Virtual starting scoreline, written `X:Y`.
    European,
    /// Single signed goal value, written `-0.5`.
    Asian,
}

/// The parameter a market is keyed by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "style")]
pub enum ParamKind {
    /// Fixed market, no parameter.
    #[default]
    None,
    /// Over/Under style market keyed by a numeric line.
    Line,
    /// Handicap market keyed by a handicap of the given style.
    Handicap(HandicapStyle),
    /// Open-ended market keyed by a free-form variant tag.
    Variant,
}

impl ParamKind {
    #[must_use]
    pub const fn is_parameterized(self) -> bool {
        !matches!(self, ParamKind::None)
    }

    /// Short human label for messages and tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ParamKind::None => "none",
            ParamKind::Line => "line",
            ParamKind::Handicap(HandicapStyle::European) => "european handicap",
            ParamKind::Handicap(HandicapStyle::Asian) => "asian handicap",
            ParamKind::Variant => "variant",
        }
    }
}

/// How a market's outcomes are matched against raw platform outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeShape {
    /// Every outcome is declared and matched by its per-platform token.
    #[default]
    Named,
    /// The platform defines the outcome set; unmatched input falls back to
    /// declaration order.
    Positional,
}

/// One selection of a market as each platform names it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeMapping {
    canonical_id: String,
    betpawa_name: Option<String>,
    sportybet_desc: Option<String>,
    bet9ja_suffix: Option<String>,
    position: usize,
}

impl OutcomeMapping {
    pub fn new(
        canonical_id: impl Into<String>,
        betpawa_name: Option<&str>,
        sportybet_desc: Option<&str>,
        bet9ja_suffix: Option<&str>,
        position: usize,
    ) -> Self {
        Self {
            canonical_id: canonical_id.into(),
            betpawa_name: betpawa_name.map(str::to_owned),
            sportybet_desc: sportybet_desc.map(str::to_owned),
            bet9ja_suffix: bet9ja_suffix.map(str::to_owned),
            position,
        }
    }

    #[must_use]
    pub fn canonical_id(&self) -> &str {
        &self.canonical_id
    }

    /// Display name on the reference platform.
    #[must_use]
    pub fn betpawa_name(&self) -> Option<&str> {
        self.betpawa_name.as_deref()
    }

    #[must_use]
    pub fn sportybet_desc(&self) -> Option<&str> {
        self.sportybet_desc.as_deref()
    }

    #[must_use]
    pub fn bet9ja_suffix(&self) -> Option<&str> {
        self.bet9ja_suffix.as_deref()
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The raw outcome token this selection carries on `platform`.
    #[must_use]
    pub fn token_for(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Betpawa => self.betpawa_name(),
            Platform::Sportybet => self.sportybet_desc(),
            Platform::Bet9ja => self.bet9ja_suffix(),
        }
    }
}

/// A market as it appears across all platforms.
///
/// Any platform identifier may be absent, meaning the market is not offered
/// there. Mappings are created once, by the catalog, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketMapping {
    canonical_id: CanonicalId,
    name: String,
    betpawa_id: Option<String>,
    sportybet_id: Option<String>,
    bet9ja_key: Option<String>,
    param: ParamKind,
    shape: OutcomeShape,
    outcomes: Vec<OutcomeMapping>,
}

impl MarketMapping {
    /// Start building a mapping.
    pub fn builder(canonical_id: impl Into<CanonicalId>, name: impl Into<String>) -> MarketMappingBuilder {
        MarketMappingBuilder {
            mapping: MarketMapping {
                canonical_id: canonical_id.into(),
                name: name.into(),
                betpawa_id: None,
                sportybet_id: None,
                bet9ja_key: None,
                param: ParamKind::None,
                shape: OutcomeShape::Named,
                outcomes: Vec::new(),
            },
        }
    }

    #[must_use]
    pub const fn canonical_id(&self) -> &CanonicalId {
        &self.canonical_id
    }

    /// Human-readable market name, used as the reference display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn betpawa_id(&self) -> Option<&str> {
        self.betpawa_id.as_deref()
    }

    #[must_use]
    pub fn sportybet_id(&self) -> Option<&str> {
        self.sportybet_id.as_deref()
    }

    #[must_use]
    pub fn bet9ja_key(&self) -> Option<&str> {
        self.bet9ja_key.as_deref()
    }

    /// The market identifier used by `platform`, if it offers this market.
    #[must_use]
    pub fn market_id_for(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Betpawa => self.betpawa_id(),
            Platform::Sportybet => self.sportybet_id(),
            Platform::Bet9ja => self.bet9ja_key(),
        }
    }

    /// Declared parameter kind of the canonical market.
    #[must_use]
    pub const fn param(&self) -> ParamKind {
        self.param
    }

    /// Parameter a given platform must supply for this market.
    ///
    /// Only Sportybet carries variants in its specifier; Betpawa and Bet9ja
    /// put the variant into the outcome token, so they need nothing extra.
    #[must_use]
    pub const fn param_for(&self, platform: Platform) -> ParamKind {
        match (self.param, platform) {
            (ParamKind::Variant, Platform::Betpawa | Platform::Bet9ja) => ParamKind::None,
            (param, _) => param,
        }
    }

    #[must_use]
    pub const fn shape(&self) -> OutcomeShape {
        self.shape
    }

    #[must_use]
    pub fn outcomes(&self) -> &[OutcomeMapping] {
        &self.outcomes
    }

    #[must_use]
    pub fn outcome_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Declared outcome at a platform position.
    #[must_use]
    pub fn outcome_at(&self, position: usize) -> Option<&OutcomeMapping> {
        self.outcomes.iter().find(|o| o.position == position)
    }

    /// True when at least one platform offers this market.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        Platform::ALL
            .iter()
            .any(|p| self.market_id_for(*p).is_some())
    }
}

/// Consuming builder for [`MarketMapping`].
///
/// Outcomes added with [`outcome`](Self::outcome) take the next position
/// after the highest one declared so far.
#[derive(Debug)]
#[must_use]
pub struct MarketMappingBuilder {
    mapping: MarketMapping,
}

impl MarketMappingBuilder {
    pub fn betpawa(mut self, id: &str) -> Self {
        self.mapping.betpawa_id = Some(id.to_owned());
        self
    }

    pub fn sportybet(mut self, id: &str) -> Self {
        self.mapping.sportybet_id = Some(id.to_owned());
        self
    }

    pub fn bet9ja(mut self, key: &str) -> Self {
        self.mapping.bet9ja_key = Some(key.to_owned());
        self
    }

    pub fn param(mut self, param: ParamKind) -> Self {
        self.mapping.param = param;
        self
    }

    pub fn line(self) -> Self {
        self.param(ParamKind::Line)
    }

    pub fn handicap(self, style: HandicapStyle) -> Self {
        self.param(ParamKind::Handicap(style))
    }

    pub fn variant(self) -> Self {
        self.param(ParamKind::Variant)
    }

    pub fn positional(mut self) -> Self {
        self.mapping.shape = OutcomeShape::Positional;
        self
    }

    /// Declare the next outcome.
    pub fn outcome(
        self,
        canonical_id: &str,
        betpawa: Option<&str>,
        sportybet: Option<&str>,
        bet9ja: Option<&str>,
    ) -> Self {
        let position = self
            .mapping
            .outcomes
            .iter()
            .map(|o| o.position + 1)
            .max()
            .unwrap_or(0);
        self.outcome_at(position, canonical_id, betpawa, sportybet, bet9ja)
    }

    /// Declare an outcome at an explicit position.
    pub fn outcome_at(
        mut self,
        position: usize,
        canonical_id: &str,
        betpawa: Option<&str>,
        sportybet: Option<&str>,
        bet9ja: Option<&str>,
    ) -> Self {
        self.mapping.outcomes.push(OutcomeMapping::new(
            canonical_id,
            betpawa,
            sportybet,
            bet9ja,
            position,
        ));
        self
    }

    #[must_use]
    pub fn build(self) -> MarketMapping {
        self.mapping
    }
}
