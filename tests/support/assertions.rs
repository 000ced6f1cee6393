use rust_decimal::Decimal;

use oddsmap::domain::MappedMarket;
use oddsmap::error::{ErrorCode, MappingError};

/// Assert that `market` has an outcome with the given reference name and odds.
pub fn assert_outcome(market: &MappedMarket, betpawa_name: &str, odds: Decimal) {
    let outcome = market.outcome_named(betpawa_name).unwrap_or_else(|| {
        let names: Vec<_> = market
            .outcomes()
            .iter()
            .map(|o| o.betpawa_name().unwrap_or("?"))
            .collect();
        panic!("no outcome named '{betpawa_name}', have {names:?}")
    });
    assert_eq!(outcome.odds(), odds, "odds for '{betpawa_name}'");
}

/// Assert that a mapping attempt failed with `code`.
pub fn assert_code(result: Result<MappedMarket, MappingError>, code: ErrorCode) {
    match result {
        Ok(market) => panic!("expected {code}, got market '{}'", market.canonical_id()),
        Err(e) => assert_eq!(e.code(), code, "unexpected error: {e}"),
    }
}
