//! Platform grammar parsers on realistic and hostile input.

use oddsmap::domain::HandicapStyle;
use oddsmap::parse::{
    parse_bet9ja_key, parse_handicap, parse_line, parse_specifier, KEY_MAX_LEN, SPECIFIER_MAX_LEN,
};

#[test]
fn bet9ja_keys_from_a_live_feed() {
    let cases = [
        ("S_1X2_1", "1X2", None, "1"),
        ("S_OU@2.5_O", "OU", Some("2.5"), "O"),
        ("S_1X2HND@0:1_X", "1X2HND", Some("0:1"), "X"),
        ("S_AH@-0.25_1", "AH", Some("-0.25"), "1"),
        ("S_CS_1:0", "CS", None, "1:0"),
        ("S_HTFT_1/X", "HTFT", None, "1/X"),
        ("S_EG_6+", "EG", None, "6+"),
        ("  S_DC_1X  ", "DC", None, "1X"),
    ];
    for (raw, market, param, outcome) in cases {
        let key = parse_bet9ja_key(raw).unwrap_or_else(|| panic!("failed to parse {raw}"));
        assert_eq!(key.market, market, "{raw}");
        assert_eq!(key.param.as_deref(), param, "{raw}");
        assert_eq!(key.outcome, outcome, "{raw}");
    }
}

#[test]
fn outcome_may_contain_underscores() {
    let key = parse_bet9ja_key("S_1X2OU@2.5_1_O").unwrap();
    assert_eq!(key.market, "1X2OU");
    assert_eq!(key.outcome, "1_O");
}

#[test]
fn malformed_keys() {
    let long = format!("S_1X2_{}", "1".repeat(KEY_MAX_LEN));
    for raw in [
        "",
        "   ",
        "1X2_1",
        "s_1X2_1",
        "S_",
        "S__",
        "S_1X2",
        "S_1X2_",
        "S_@_1",
        "S_____",
        long.as_str(),
    ] {
        assert!(parse_bet9ja_key(raw).is_none(), "{raw:?} should not parse");
    }
}

#[test]
fn key_at_length_cap_still_parses() {
    let outcome = "1".repeat(KEY_MAX_LEN - "S_1X2_".len());
    let raw = format!("S_1X2_{outcome}");
    assert_eq!(raw.len(), KEY_MAX_LEN);
    assert!(parse_bet9ja_key(&raw).is_some());
}

#[test]
fn specifier_absent_versus_uninterpretable() {
    assert!(parse_specifier("").is_none());

    let spec = parse_specifier("foo=bar|||=x|y=").unwrap();
    assert!(spec.is_empty());
    assert!(spec.mentions("foo"));
    assert!(!spec.mentions("y"));
}

#[test]
fn specifier_keys_are_case_insensitive() {
    let spec = parse_specifier(" TOTAL = 3.5 | Hcp=-1 ").unwrap();
    assert_eq!(spec.total, Some(3.5));
    let handicap = spec.handicap.as_ref().unwrap();
    assert_eq!(handicap.style, HandicapStyle::Asian);
    assert_eq!(handicap.home, -1.0);
    assert!(spec.mentions("total"));
}

#[test]
fn unparsable_values_are_dropped_but_mentioned() {
    let spec = parse_specifier("total=NaN|hcp=1:2:3|goalnr=x").unwrap();
    assert_eq!(spec.total, None);
    assert_eq!(spec.handicap, None);
    assert_eq!(spec.goal_number, None);
    assert!(spec.mentions("total"));
    assert!(spec.mentions("hcp"));
}

#[test]
fn oversized_specifier() {
    let raw = format!("total=2.5|variant={}", "x".repeat(SPECIFIER_MAX_LEN));
    assert!(parse_specifier(&raw).is_none());
}

#[test]
fn handicap_zero_has_no_sign() {
    for raw in ["0", "-0", "0:0", "1:1"] {
        let h = parse_handicap(raw).unwrap();
        assert!(h.home.is_sign_positive(), "{raw}");
        assert!(h.away.is_sign_positive(), "{raw}");
    }
}

#[test]
fn handicap_shapes() {
    let european = parse_handicap("2:0").unwrap();
    assert_eq!((european.home, european.away), (2.0, -2.0));

    let asian = parse_handicap("+1.5").unwrap();
    assert_eq!((asian.home, asian.away), (1.5, -1.5));

    for raw in ["", ":1", "1:", "a:b", "inf", "1.5.5"] {
        assert!(parse_handicap(raw).is_none(), "{raw:?} should not parse");
    }
}

#[test]
fn lines_are_finite() {
    assert_eq!(parse_line(" 2.5 "), Some(2.5));
    assert_eq!(parse_line("inf"), None);
    assert_eq!(parse_line("NaN"), None);
    assert_eq!(parse_line(""), None);
}
