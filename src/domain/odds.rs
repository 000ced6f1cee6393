//! Raw odds as they arrive from platform payloads.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An odds value exactly as a platform sent it.
///
/// Some feeds send numbers, others send strings such as `"1.85"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OddsValue {
    Number(f64),
    Text(String),
}

impl OddsValue {
    /// Decimal odds, if the value is finite and strictly positive.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        let value = match self {
            OddsValue::Number(n) if n.is_finite() => Decimal::from_f64(*n)?,
            OddsValue::Number(_) => return None,
            OddsValue::Text(s) => parse_text(s)?,
        };
        (value > Decimal::ZERO).then_some(value)
    }
}

fn parse_text(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok().or_else(|| {
        // exponent notation and friends
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .and_then(Decimal::from_f64)
    })
}

impl From<f64> for OddsValue {
    fn from(n: f64) -> Self {
        OddsValue::Number(n)
    }
}

impl From<&str> for OddsValue {
    fn from(s: &str) -> Self {
        OddsValue::Text(s.to_owned())
    }
}

impl From<String> for OddsValue {
    fn from(s: String) -> Self {
        OddsValue::Text(s)
    }
}

/// One raw outcome price plus its activity flag.
///
/// Deserializes from a bare number, a bare string, or
/// `{ "odds": ..., "active": false }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOutcomeRepr")]
pub struct RawOutcome {
    pub odds: OddsValue,
    pub active: bool,
}

impl RawOutcome {
    pub fn new(odds: impl Into<OddsValue>, active: bool) -> Self {
        Self {
            odds: odds.into(),
            active,
        }
    }

    /// A suspended price.
    pub fn inactive(odds: impl Into<OddsValue>) -> Self {
        Self::new(odds, false)
    }
}

impl From<OddsValue> for RawOutcome {
    fn from(odds: OddsValue) -> Self {
        Self::new(odds, true)
    }
}

impl From<f64> for RawOutcome {
    fn from(odds: f64) -> Self {
        Self::new(odds, true)
    }
}

impl From<&str> for RawOutcome {
    fn from(odds: &str) -> Self {
        Self::new(odds, true)
    }
}

impl From<String> for RawOutcome {
    fn from(odds: String) -> Self {
        Self::new(odds, true)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOutcomeRepr {
    Bare(OddsValue),
    Full {
        odds: OddsValue,
        #[serde(default = "default_active")]
        active: bool,
    },
}

fn default_active() -> bool {
    true
}

impl From<RawOutcomeRepr> for RawOutcome {
    fn from(repr: RawOutcomeRepr) -> Self {
        match repr {
            RawOutcomeRepr::Bare(odds) => RawOutcome::new(odds, true),
            RawOutcomeRepr::Full { odds, active } => RawOutcome::new(odds, active),
        }
    }
}
