//! Sportybet compound specifiers.
//!
//! A specifier parameterizes a market: `total=2.5`, `hcp=0:1`,
//! `variant=sr:exact_goals:6+`, `goalnr=2`, or several of them joined with
//! `|`. Blank or unrecognized segments are skipped, so a specifier that is
//! present but carries nothing usable still parses to an empty record.

use serde::Serialize;

use super::handicap::{parse_handicap, parse_line, ParsedHandicap};

/// Longest specifier, in bytes, that the parser will look at.
pub const SPECIFIER_MAX_LEN: usize = 256;

/// Structured view of a specifier string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedSpecifier {
    pub total: Option<f64>,
    pub handicap: Option<ParsedHandicap>,
    pub variant: Option<String>,
    pub goal_number: Option<i32>,
    pub score: Option<String>,
    pub raw: String,
}

impl ParsedSpecifier {
    /// True when `key` appears as a non-empty `key=value` segment of the raw
    /// specifier, whether or not its value parsed.
    #[must_use]
    pub fn mentions(&self, key: &str) -> bool {
        segments(&self.raw).any(|(k, _)| k == key)
    }

    /// True when no recognized field was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total.is_none()
            && self.handicap.is_none()
            && self.variant.is_none()
            && self.goal_number.is_none()
            && self.score.is_none()
    }
}

/// Parse a specifier. `None` only for blank or oversized input.
#[must_use]
pub fn parse_specifier(raw: &str) -> Option<ParsedSpecifier> {
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > SPECIFIER_MAX_LEN {
        return None;
    }

    let mut spec = ParsedSpecifier {
        raw: raw.to_owned(),
        ..ParsedSpecifier::default()
    };

    // A value that fails to parse never clears one parsed earlier.
    for (key, value) in segments(raw) {
        match key.as_str() {
            "total" => {
                if let Some(total) = parse_line(value) {
                    spec.total = Some(total);
                }
            }
            "hcp" => {
                if let Some(handicap) = parse_handicap(value) {
                    spec.handicap = Some(handicap);
                }
            }
            "variant" => spec.variant = Some(value.to_owned()),
            "goalnr" => {
                if let Ok(goal) = value.parse() {
                    spec.goal_number = Some(goal);
                }
            }
            "score" => spec.score = Some(value.to_owned()),
            _ => {}
        }
    }

    Some(spec)
}

/// Non-empty `key=value` pairs, keys lower-cased, both sides trimmed.
fn segments(raw: &str) -> impl Iterator<Item = (String, &str)> {
    raw.split('|').filter_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return None;
        }
        Some((key.to_lowercase(), value))
    })
}
