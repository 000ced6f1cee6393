//! Betpawa (reference) market assembly.
//!
//! Reference input is already in the target vocabulary; mapping it validates
//! the market and outcome names and normalizes prices, so every platform
//! yields the same [`MappedMarket`] shape.

use crate::domain::{MappedMarket, Platform, RawOutcome};
use crate::error::MappingError;

use super::param::token_param;
use super::{collect_outcomes, MarketMapper};

const PLATFORM: Platform = Platform::Betpawa;

impl MarketMapper<'_> {
    /// Map a Betpawa market by its market id. `param` carries the line
    /// (`2.5`) or handicap (`0:1`, `-1.5`) for parameterized markets.
    ///
    /// # Errors
    ///
    /// Same as [`map_bet9ja`](Self::map_bet9ja).
    pub fn map_betpawa<I, K, V>(
        &self,
        market_id: &str,
        param: Option<&str>,
        outcomes: I,
    ) -> Result<MappedMarket, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawOutcome>,
    {
        let market_id = market_id.trim();
        let mapping = self.lookup(PLATFORM, market_id)?;
        let param = token_param(mapping, PLATFORM, market_id, param)?;
        self.assemble(mapping, PLATFORM, market_id, &param, &collect_outcomes(outcomes))
    }
}
