//! Cross-platform market mapping registry.
//!
//! The registry is an immutable table of [`MarketMapping`]s plus one index per
//! platform identifier and one by canonical ID. Classification sets record
//! which competitor markets need a parameter of each kind. They are a
//! read-only view for callers that only hold a competitor market id; the
//! mapper reads [`MarketMapping::param_for`] on the mapping it already has,
//! and both are derived from the same catalog entry.
//!
//! The process-wide instance built from the literal [`catalog`] is available
//! through [`registry()`]. It is constructed on first use behind a
//! [`OnceLock`] and read without synchronization afterwards.

pub mod catalog;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::warn;

use crate::domain::{Competitor, MarketMapping, ParamKind, Platform};
use crate::error::RegistryError;

static REGISTRY: OnceLock<MappingRegistry> = OnceLock::new();

/// The process-wide registry built from the built-in catalog.
///
/// # Panics
///
/// Panics if the built-in catalog violates registry invariants. The catalog
/// test suite guards against that.
pub fn registry() -> &'static MappingRegistry {
    REGISTRY.get_or_init(|| {
        MappingRegistry::new(catalog::markets())
            .unwrap_or_else(|e| panic!("built-in market catalog is invalid: {e}"))
    })
}

/// Read-only market table with O(1) lookups.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    markets: Vec<MarketMapping>,
    by_canonical: HashMap<String, usize>,
    by_betpawa: HashMap<String, usize>,
    by_sportybet: HashMap<String, usize>,
    by_bet9ja: HashMap<String, usize>,
    line: HashSet<(Competitor, String)>,
    handicap: HashSet<(Competitor, String)>,
    variant: HashSet<(Competitor, String)>,
}

impl MappingRegistry {
    /// Build a registry, validating every mapping.
    ///
    /// # Errors
    ///
    /// Fails on empty or duplicate canonical IDs, on a platform identifier
    /// claimed by two markets, and on duplicate outcome positions.
    pub fn new(markets: Vec<MarketMapping>) -> Result<Self, RegistryError> {
        let mut registry = Self::default();

        for (idx, market) in markets.iter().enumerate() {
            let canonical = market.canonical_id();
            if canonical.is_blank() {
                return Err(RegistryError::EmptyCanonicalId);
            }
            if registry
                .by_canonical
                .insert(canonical.as_str().to_owned(), idx)
                .is_some()
            {
                return Err(RegistryError::DuplicateCanonicalId(canonical.to_string()));
            }

            let mut positions = HashSet::new();
            for outcome in market.outcomes() {
                if !positions.insert(outcome.position()) {
                    return Err(RegistryError::DuplicatePosition {
                        market: canonical.to_string(),
                        position: outcome.position(),
                    });
                }
            }

            for platform in Platform::ALL {
                let Some(id) = market.market_id_for(platform) else {
                    continue;
                };
                let index = match platform {
                    Platform::Betpawa => &mut registry.by_betpawa,
                    Platform::Sportybet => &mut registry.by_sportybet,
                    Platform::Bet9ja => &mut registry.by_bet9ja,
                };
                if let Some(first) = index.insert(id.to_owned(), idx) {
                    return Err(RegistryError::DuplicatePlatformId {
                        platform,
                        id: id.to_owned(),
                        first: markets[first].canonical_id().to_string(),
                        second: canonical.to_string(),
                    });
                }
            }

            for competitor in Competitor::ALL {
                let platform = Platform::from(competitor);
                let Some(id) = market.market_id_for(platform) else {
                    continue;
                };
                let set = match market.param_for(platform) {
                    ParamKind::None => continue,
                    ParamKind::Line => &mut registry.line,
                    ParamKind::Handicap(_) => &mut registry.handicap,
                    ParamKind::Variant => &mut registry.variant,
                };
                set.insert((competitor, id.to_owned()));
            }

            if !market.is_reachable() {
                warn!(market = %canonical, "market mapping has no platform identifier");
            }
        }

        registry.markets = markets;
        Ok(registry)
    }

    /// Look up by Betpawa market type ID.
    #[must_use]
    pub fn find_by_reference_id(&self, id: &str) -> Option<&MarketMapping> {
        self.lookup(&self.by_betpawa, id)
    }

    /// Look up by a competitor's market identifier.
    #[must_use]
    pub fn find_by_competitor_id(&self, competitor: Competitor, id: &str) -> Option<&MarketMapping> {
        match competitor {
            Competitor::Sportybet => self.lookup(&self.by_sportybet, id),
            Competitor::Bet9ja => self.lookup(&self.by_bet9ja, id),
        }
    }

    #[must_use]
    pub fn find_by_canonical_id(&self, id: &str) -> Option<&MarketMapping> {
        self.lookup(&self.by_canonical, id)
    }

    /// Look up by the market identifier `platform` uses.
    #[must_use]
    pub fn find(&self, platform: Platform, id: &str) -> Option<&MarketMapping> {
        match platform.competitor() {
            Some(competitor) => self.find_by_competitor_id(competitor, id),
            None => self.find_by_reference_id(id),
        }
    }

    /// True for competitor markets keyed by an Over/Under line.
    ///
    /// Agrees with [`MarketMapping::param_for`] for the same market.
    #[must_use]
    pub fn requires_line(&self, competitor: Competitor, id: &str) -> bool {
        self.line.contains(&(competitor, id.to_owned()))
    }

    /// True for competitor markets keyed by a European or Asian handicap.
    #[must_use]
    pub fn requires_handicap(&self, competitor: Competitor, id: &str) -> bool {
        self.handicap.contains(&(competitor, id.to_owned()))
    }

    /// True for competitor markets keyed by a free-form variant.
    #[must_use]
    pub fn requires_variant(&self, competitor: Competitor, id: &str) -> bool {
        self.variant.contains(&(competitor, id.to_owned()))
    }

    /// All mappings in catalog order.
    #[must_use]
    pub fn markets(&self) -> &[MarketMapping] {
        &self.markets
    }

    /// Mappings offered by `platform`.
    pub fn offered_by(&self, platform: Platform) -> impl Iterator<Item = &MarketMapping> {
        self.markets
            .iter()
            .filter(move |m| m.market_id_for(platform).is_some())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    fn lookup(&self, index: &HashMap<String, usize>, id: &str) -> Option<&MarketMapping> {
        index.get(id).map(|&i| &self.markets[i])
    }
}
