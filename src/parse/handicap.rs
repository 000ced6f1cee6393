//! Handicap and line values shared by every parameter grammar.

use serde::Serialize;

use crate::domain::{HandicapStyle, MappedHandicap};

/// A handicap decoded from text.
///
/// `away` is always the negation of `home`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedHandicap {
    pub style: HandicapStyle,
    pub home: f64,
    pub away: f64,
    pub raw: String,
}

impl ParsedHandicap {
    #[must_use]
    pub fn to_mapped(&self) -> MappedHandicap {
        MappedHandicap::new(self.style, self.home, self.away)
    }
}

/// Parse a finite decimal. `None` for empty, unparsable, NaN or infinite input.
#[must_use]
pub fn parse_line(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a handicap value.
///
/// - `X:Y` is European: a virtual starting score, so `home = X - Y` and
///   `away = Y - X`. Exactly one colon, both sides non-empty.
/// - A single decimal is Asian: `home = v`, `away = -v`.
#[must_use]
pub fn parse_handicap(raw: &str) -> Option<ParsedHandicap> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (style, home) = match trimmed.split_once(':') {
        Some((home_goals, away_goals)) => {
            if away_goals.contains(':') {
                return None;
            }
            let x = parse_line(home_goals)?;
            let y = parse_line(away_goals)?;
            let home = x - y;
            if !home.is_finite() {
                return None;
            }
            (HandicapStyle::European, home)
        }
        None => (HandicapStyle::Asian, parse_line(trimmed)?),
    };

    Some(ParsedHandicap {
        style,
        home: normalize_zero(home),
        away: negate(home),
        raw: trimmed.to_owned(),
    })
}

fn negate(v: f64) -> f64 {
    normalize_zero(-v)
}

fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
