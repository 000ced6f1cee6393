//! Registry behavior through the public API.

use std::thread;

use oddsmap::domain::{Competitor, HandicapStyle, MarketMapping, ParamKind, Platform};
use oddsmap::error::RegistryError;
use oddsmap::mapper::MarketMapper;
use oddsmap::registry::{registry, MappingRegistry};

fn market(canonical: &str, bet9ja: &str) -> MarketMapping {
    MarketMapping::builder(canonical, canonical)
        .bet9ja(bet9ja)
        .outcome("yes", Some("Yes"), None, Some("Y"))
        .build()
}

#[test]
fn global_registry_is_built_once() {
    let addresses: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| registry() as *const MappingRegistry as usize))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn every_platform_lookup_reaches_the_same_market() {
    let reg = registry();
    let by_reference = reg.find_by_reference_id("5000").unwrap();
    let by_sportybet = reg.find_by_competitor_id(Competitor::Sportybet, "18").unwrap();
    let by_bet9ja = reg.find_by_competitor_id(Competitor::Bet9ja, "OU").unwrap();
    let by_canonical = reg.find_by_canonical_id("over_under_ft").unwrap();

    assert_eq!(by_reference, by_sportybet);
    assert_eq!(by_sportybet, by_bet9ja);
    assert_eq!(by_bet9ja, by_canonical);
    assert_eq!(reg.find(Platform::Betpawa, "5000"), Some(by_canonical));
}

#[test]
fn lookups_are_exact() {
    let reg = registry();
    assert!(reg.find_by_competitor_id(Competitor::Bet9ja, "ou").is_none());
    assert!(reg.find_by_competitor_id(Competitor::Bet9ja, "18").is_none());
    assert!(reg.find_by_reference_id("").is_none());
}

#[test]
fn classification_matches_param_kinds() {
    let reg = registry();
    assert!(reg.requires_line(Competitor::Sportybet, "18"));
    assert!(reg.requires_line(Competitor::Bet9ja, "OU"));
    assert!(reg.requires_handicap(Competitor::Sportybet, "14"));
    assert!(reg.requires_handicap(Competitor::Bet9ja, "AH"));
    assert!(reg.requires_variant(Competitor::Sportybet, "45"));
    // Bet9ja encodes the variant in the outcome suffix.
    assert!(!reg.requires_variant(Competitor::Bet9ja, "CS"));
    assert!(!reg.requires_line(Competitor::Sportybet, "1"));

    for mapping in reg.markets() {
        for competitor in Competitor::ALL {
            let Some(id) = mapping.market_id_for(Platform::from(competitor)) else {
                continue;
            };
            let kind = mapping.param_for(Platform::from(competitor));
            let what = format!("{} {competitor}", mapping.canonical_id());
            assert_eq!(reg.requires_line(competitor, id), kind == ParamKind::Line, "{what}");
            assert_eq!(
                reg.requires_handicap(competitor, id),
                matches!(kind, ParamKind::Handicap(_)),
                "{what}"
            );
            assert_eq!(reg.requires_variant(competitor, id), kind == ParamKind::Variant, "{what}");
        }
    }
}

#[test]
fn handicap_styles_in_catalog() {
    let reg = registry();
    let european = reg.find_by_canonical_id("european_handicap_ft").unwrap();
    let asian = reg.find_by_canonical_id("asian_handicap_ft").unwrap();
    assert_eq!(european.param(), ParamKind::Handicap(HandicapStyle::European));
    assert_eq!(asian.param(), ParamKind::Handicap(HandicapStyle::Asian));
}

#[test]
fn offered_by_filters_on_platform_ids() {
    let reg = registry();
    let betpawa: Vec<_> = reg.offered_by(Platform::Betpawa).collect();
    assert!(betpawa.iter().all(|m| m.betpawa_id().is_some()));
    assert!(betpawa.len() < reg.len());
    assert_eq!(reg.offered_by(Platform::Bet9ja).count(), reg.len());
}

#[test]
fn custom_registry_drives_a_mapper() {
    let reg = MappingRegistry::new(vec![market("custom", "CUST")]).unwrap();
    let mapper = MarketMapper::new(&reg);
    let mapped = mapper.map_bet9ja("CUST", None, [("Y", "1.5")]).unwrap();
    assert_eq!(mapped.canonical_id().as_str(), "custom");
    assert_eq!(mapped.outcomes()[0].betpawa_name(), Some("Yes"));

    // the global catalog is not consulted
    assert!(mapper.map_bet9ja("1X2", None, [("1", "1.5")]).is_err());
}

#[test]
fn construction_rejects_conflicts() {
    let err = MappingRegistry::new(vec![market("a", "X"), market("a", "Y")]).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateCanonicalId("a".into()));

    let err = MappingRegistry::new(vec![market("a", "X"), market("b", "X")]).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::DuplicatePlatformId {
            platform: Platform::Bet9ja,
            ..
        }
    ));

    assert_eq!(
        MappingRegistry::new(vec![market("", "X")]).unwrap_err(),
        RegistryError::EmptyCanonicalId
    );
}

#[test]
fn empty_registry_maps_nothing() {
    let reg = MappingRegistry::new(Vec::new()).unwrap();
    assert!(reg.is_empty());
    let err = MarketMapper::new(&reg)
        .map_sportybet("1", None, [("1", "2.0")])
        .unwrap_err();
    assert_eq!(err.market(), "1");
}
