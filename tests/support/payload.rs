use indexmap::IndexMap;

use oddsmap::domain::RawOutcome;

/// A Bet9ja event odds map as scraped: several markets, one line family,
/// a handicap, and some noise.
pub fn bet9ja_event() -> IndexMap<String, RawOutcome> {
    [
        ("S_1X2_1", "2.10"),
        ("S_1X2_X", "3.25"),
        ("S_1X2_2", "3.60"),
        ("S_OU@2.5_O", "1.95"),
        ("S_OU@2.5_U", "1.85"),
        ("S_OU@1.5_O", "1.30"),
        ("S_OU@1.5_U", "3.40"),
        ("S_1X2HND@0:1_1", "4.80"),
        ("S_1X2HND@0:1_X", "4.10"),
        ("S_1X2HND@0:1_2", "1.55"),
        ("S_GGNG_GG", "1.75"),
        ("S_GGNG_NG", "2.00"),
        ("S_UNKNOWN_1", "9.99"),
        ("not-a-key", "1.01"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), RawOutcome::from(v)))
    .collect()
}

pub fn outcomes(items: &[(&str, &str)]) -> Vec<(String, RawOutcome)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_owned(), RawOutcome::from(*v)))
        .collect()
}
