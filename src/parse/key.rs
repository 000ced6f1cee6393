//! Bet9ja flattened odds keys.
//!
//! Bet9ja ships every price under a key such as `S_1X2_1` or `S_OU@2.5_O`:
//! `S_<MARKET>[@<PARAM>]_<OUTCOME>`. The outcome is the remainder and may
//! itself contain underscores or colons.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Longest key, after trimming, that the parser will look at.
pub const KEY_MAX_LEN: usize = 128;

const KEY_PREFIX: &str = "S_";

static RE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^S_([A-Za-z0-9_-]+?)(?:@([^_]+))?_(.+)$").expect("valid key pattern")
});

/// A decomposed Bet9ja key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedBet9jaKey {
    pub market: String,
    pub param: Option<String>,
    pub outcome: String,
    pub raw: String,
}

/// Parse a flattened key. Never panics; malformed input yields `None`.
#[must_use]
pub fn parse_bet9ja_key(raw: &str) -> Option<ParsedBet9jaKey> {
    let key = raw.trim();
    if key.is_empty() || key.len() > KEY_MAX_LEN || !key.starts_with(KEY_PREFIX) {
        return None;
    }
    if is_degenerate(&key[KEY_PREFIX.len()..]) {
        return None;
    }

    let caps = RE_KEY.captures(key)?;
    let market = caps.get(1)?.as_str();
    let outcome = caps.get(3)?.as_str();
    if market.is_empty() || is_degenerate(outcome) {
        return None;
    }

    Some(ParsedBet9jaKey {
        market: market.to_owned(),
        param: caps.get(2).map(|m| m.as_str().to_owned()),
        outcome: outcome.to_owned(),
        raw: key.to_owned(),
    })
}

/// Nothing but separators.
fn is_degenerate(body: &str) -> bool {
    body.chars().all(|c| c == '_' || c == '@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_market() {
        let k = parse_bet9ja_key("S_1X2_1").unwrap();
        assert_eq!(k.market, "1X2");
        assert_eq!(k.param, None);
        assert_eq!(k.outcome, "1");
        assert_eq!(k.raw, "S_1X2_1");
    }

    #[test]
    fn market_with_param() {
        let k = parse_bet9ja_key("S_OU@2.5_O").unwrap();
        assert_eq!(k.market, "OU");
        assert_eq!(k.param.as_deref(), Some("2.5"));
        assert_eq!(k.outcome, "O");
    }

    #[test]
    fn european_handicap_param_keeps_colon() {
        let k = parse_bet9ja_key("S_1X2HND@0:1_X").unwrap();
        assert_eq!(k.market, "1X2HND");
        assert_eq!(k.param.as_deref(), Some("0:1"));
        assert_eq!(k.outcome, "X");
    }

    #[test]
    fn negative_param() {
        let k = parse_bet9ja_key("S_AH@-0.5_2").unwrap();
        assert_eq!(k.market, "AH");
        assert_eq!(k.param.as_deref(), Some("-0.5"));
        assert_eq!(k.outcome, "2");
    }

    #[test]
    fn outcome_keeps_underscores_and_colons() {
        let k = parse_bet9ja_key("S_CS_OTHER_HOME").unwrap();
        assert_eq!(k.market, "CS");
        assert_eq!(k.outcome, "OTHER_HOME");

        let k = parse_bet9ja_key("S_CS_2:1").unwrap();
        assert_eq!(k.outcome, "2:1");
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let k = parse_bet9ja_key("  S_GGNG_GG \n").unwrap();
        assert_eq!(k.market, "GGNG");
        assert_eq!(k.raw, "S_GGNG_GG");
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(parse_bet9ja_key("1X2_1").is_none());
        assert!(parse_bet9ja_key("s_1X2_1").is_none());
        assert!(parse_bet9ja_key("X_1X2_1").is_none());
    }

    #[test]
    fn rejects_empty_and_degenerate() {
        for raw in ["", "   ", "S_", "S__", "S___", "S____", "S_@_", "S_@@__"] {
            assert!(parse_bet9ja_key(raw).is_none(), "{raw:?}");
        }
    }

    #[test]
    fn rejects_missing_outcome() {
        assert!(parse_bet9ja_key("S_1X2").is_none());
        assert!(parse_bet9ja_key("S_1X2_").is_none());
        assert!(parse_bet9ja_key("S_OU@2.5_").is_none());
        assert!(parse_bet9ja_key("S_1X2__").is_none());
    }

    #[test]
    fn rejects_oversized_input() {
        let long = format!("S_1X2_{}", "1".repeat(KEY_MAX_LEN));
        assert!(parse_bet9ja_key(&long).is_none());

        let hostile = format!("S_{}", "_@".repeat(100_000));
        assert!(parse_bet9ja_key(&hostile).is_none());
    }

    #[test]
    fn accepts_key_at_cap() {
        let outcome = "1".repeat(KEY_MAX_LEN - "S_1X2_".len());
        let key = format!("S_1X2_{outcome}");
        assert_eq!(key.len(), KEY_MAX_LEN);
        assert!(parse_bet9ja_key(&key).is_some());
    }

    #[test]
    fn rejects_invalid_market_characters() {
        assert!(parse_bet9ja_key("S_1 X2_1").is_none());
        assert!(parse_bet9ja_key("S_O/U_O").is_none());
    }
}
