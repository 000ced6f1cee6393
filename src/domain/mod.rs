//! Platform-agnostic domain types.

mod id;
mod mapped;
mod market;
mod odds;
mod platform;

pub use id::CanonicalId;
pub use mapped::{MappedHandicap, MappedMarket, MappedOutcome};
pub use market::{
    HandicapStyle, MarketMapping, MarketMappingBuilder, OutcomeMapping, OutcomeShape, ParamKind,
};
pub use odds::{OddsValue, RawOutcome};
pub use platform::{Competitor, Platform};
