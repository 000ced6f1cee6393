//! Outcome resolution.
//!
//! Pairs raw platform outcomes with the declared outcomes of a matched
//! market. Name matching runs first, in declaration order. When nothing
//! matches by name and the market is [`OutcomeShape::Positional`], every raw
//! item is mapped by its index instead, in the platform's own order.
//!
//! A price that is not a finite positive number drops its outcome; if that
//! leaves nothing, the caller reports NO_MATCHING_OUTCOMES.

use tracing::debug;

use crate::domain::{MappedOutcome, MarketMapping, OutcomeShape, Platform, RawOutcome};

/// Resolve raw outcomes against `mapping` as sent by `platform`.
#[must_use]
pub fn resolve_outcomes(
    mapping: &MarketMapping,
    platform: Platform,
    raw: &[(String, RawOutcome)],
) -> Vec<MappedOutcome> {
    let mut matched_any = false;
    let mut resolved = Vec::with_capacity(mapping.outcome_count());

    for declared in mapping.outcomes() {
        let Some(token) = declared.token_for(platform) else {
            continue;
        };
        let Some((source, price)) = raw.iter().find(|(t, _)| t == token) else {
            continue;
        };
        matched_any = true;

        let Some(odds) = price.odds.to_decimal() else {
            debug!(
                market = %mapping.canonical_id(),
                %platform,
                outcome = %source,
                odds = ?price.odds,
                "dropping outcome with unusable odds"
            );
            continue;
        };
        resolved.push(MappedOutcome::new(
            declared.canonical_id(),
            declared.betpawa_name().map(str::to_owned),
            competitor_token(platform, source),
            odds,
            price.active,
        ));
    }

    if matched_any || mapping.shape() != OutcomeShape::Positional {
        return resolved;
    }

    resolve_by_position(mapping, platform, raw)
}

fn resolve_by_position(
    mapping: &MarketMapping,
    platform: Platform,
    raw: &[(String, RawOutcome)],
) -> Vec<MappedOutcome> {
    raw.iter()
        .enumerate()
        .filter_map(|(position, (source, price))| {
            let Some(odds) = price.odds.to_decimal() else {
                debug!(
                    market = %mapping.canonical_id(),
                    %platform,
                    position,
                    outcome = %source,
                    "dropping positional outcome with unusable odds"
                );
                return None;
            };
            let declared = mapping.outcome_at(position);
            let canonical = declared.map_or(source.as_str(), |d| d.canonical_id());
            let name = declared.and_then(|d| d.betpawa_name()).map(str::to_owned);
            Some(MappedOutcome::new(
                canonical,
                name,
                competitor_token(platform, source),
                odds,
                price.active,
            ))
        })
        .collect()
}

/// Reference input has no competitor outcome token.
fn competitor_token(platform: Platform, source: &str) -> Option<String> {
    (!platform.is_reference()).then(|| source.to_owned())
}
