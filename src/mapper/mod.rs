//! Per-platform market assemblers and the unified dispatcher.
//!
//! Every assembler follows the same steps:
//!
//! 1. resolve the raw market identifier against the registry
//!    (UNKNOWN_MARKET);
//! 2. validate the parameter the market requires (INVALID_SPECIFIER,
//!    UNKNOWN_PARAM_MARKET);
//! 3. resolve outcomes (NO_MATCHING_OUTCOMES when none survive);
//! 4. assemble the immutable [`MappedMarket`].
//!
//! [`MarketMapper`] borrows a registry, so it is `Copy` and can be shared
//! freely across threads. The free functions at the bottom use the
//! process-wide registry.

mod bet9ja;
mod betpawa;
mod dispatch;
mod param;
mod sportybet;

pub use bet9ja::BatchReport;
pub use dispatch::{Dispatched, MarketInput};

use tracing::trace;

use crate::domain::{MappedMarket, MarketMapping, Platform, RawOutcome};
use crate::error::MappingError;
use crate::registry::{registry, MappingRegistry};
use crate::resolve::resolve_outcomes;

use param::MarketParam;

/// Maps raw platform markets through a registry.
#[derive(Debug, Clone, Copy)]
pub struct MarketMapper<'r> {
    registry: &'r MappingRegistry,
}

impl MarketMapper<'static> {
    /// A mapper over the built-in catalog.
    #[must_use]
    pub fn global() -> Self {
        Self::new(registry())
    }
}

impl<'r> MarketMapper<'r> {
    #[must_use]
    pub const fn new(registry: &'r MappingRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &'r MappingRegistry {
        self.registry
    }

    /// Map one market from any platform.
    ///
    /// `parameter` is the Sportybet specifier, the Bet9ja `@<PARAM>` token, or
    /// the Betpawa line/handicap token, depending on `platform`.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] describing why the market cannot be mapped.
    pub fn map_single<I, K, V>(
        &self,
        platform: Platform,
        market_id: &str,
        parameter: Option<&str>,
        outcomes: I,
    ) -> Result<MappedMarket, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawOutcome>,
    {
        match platform {
            Platform::Betpawa => self.map_betpawa(market_id, parameter, outcomes),
            Platform::Sportybet => self.map_sportybet(market_id, parameter, outcomes),
            Platform::Bet9ja => self.map_bet9ja(market_id, parameter, outcomes),
        }
    }

    fn lookup(&self, platform: Platform, market_id: &str) -> Result<&'r MarketMapping, MappingError> {
        self.registry
            .find(platform, market_id)
            .ok_or_else(|| MappingError::UnknownMarket {
                platform,
                market: market_id.to_owned(),
            })
    }

    fn assemble(
        &self,
        mapping: &MarketMapping,
        platform: Platform,
        market_id: &str,
        param: &MarketParam,
        raw: &[(String, RawOutcome)],
    ) -> Result<MappedMarket, MappingError> {
        let outcomes = resolve_outcomes(mapping, platform, raw);
        if outcomes.is_empty() {
            return Err(MappingError::NoMatchingOutcomes {
                platform,
                market: market_id.to_owned(),
            });
        }

        trace!(
            market = %mapping.canonical_id(),
            %platform,
            variant = param.variant(),
            outcomes = outcomes.len(),
            "mapped market"
        );

        Ok(MappedMarket::new(
            mapping.canonical_id().clone(),
            mapping.betpawa_id().map(str::to_owned),
            mapping.name().to_owned(),
            platform,
            (!platform.is_reference()).then(|| market_id.to_owned()),
            param.line(),
            param.handicap(),
            outcomes,
        ))
    }
}

fn collect_outcomes<I, K, V>(outcomes: I) -> Vec<(String, RawOutcome)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<RawOutcome>,
{
    outcomes
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Map one market through the built-in catalog.
///
/// # Errors
///
/// See [`MarketMapper::map_single`].
pub fn map_single<I, K, V>(
    platform: Platform,
    market_id: &str,
    parameter: Option<&str>,
    outcomes: I,
) -> Result<MappedMarket, MappingError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<RawOutcome>,
{
    MarketMapper::global().map_single(platform, market_id, parameter, outcomes)
}

/// Map a Bet9ja flattened odds map through the built-in catalog.
/// Unmappable entries are omitted.
pub fn map_batch_flattened<I, K, V>(odds: I) -> Vec<MappedMarket>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<RawOutcome>,
{
    MarketMapper::global().map_bet9ja_batch(odds)
}

/// Route a tagged input through the built-in catalog.
///
/// # Errors
///
/// Only single-market inputs can fail; batch inputs never do.
pub fn map_dispatch(input: MarketInput) -> Result<Dispatched, MappingError> {
    MarketMapper::global().dispatch(input)
}
