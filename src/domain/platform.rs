//! Bookmaker platforms known to the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A bookmaker whose odds flow through the engine.
///
/// Betpawa is the reference platform: every mapped market is expressed in
/// its market IDs and outcome names. The others are competitors whose raw
/// encodings get translated into that vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Reference platform (numeric market type IDs, positional outcomes).
    Betpawa,
    /// Competitor encoding parameters as `key=value|key=value` specifiers.
    Sportybet,
    /// Competitor flattening market, parameter and outcome into one key.
    Bet9ja,
}

impl Platform {
    /// All platforms, reference first.
    pub const ALL: [Platform; 3] = [Platform::Betpawa, Platform::Sportybet, Platform::Bet9ja];

    /// Lowercase name used in logs, config and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Betpawa => "betpawa",
            Platform::Sportybet => "sportybet",
            Platform::Bet9ja => "bet9ja",
        }
    }

    /// True for the platform whose vocabulary is the mapping target.
    #[must_use]
    pub const fn is_reference(self) -> bool {
        matches!(self, Platform::Betpawa)
    }

    /// The competitor view of this platform, if it is one.
    #[must_use]
    pub const fn competitor(self) -> Option<Competitor> {
        match self {
            Platform::Betpawa => None,
            Platform::Sportybet => Some(Competitor::Sportybet),
            Platform::Bet9ja => Some(Competitor::Bet9ja),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "betpawa" => Ok(Platform::Betpawa),
            "sportybet" => Ok(Platform::Sportybet),
            "bet9ja" => Ok(Platform::Bet9ja),
            other => Err(format!("unknown platform '{other}'")),
        }
    }
}

/// A non-reference platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competitor {
    Sportybet,
    Bet9ja,
}

impl Competitor {
    pub const ALL: [Competitor; 2] = [Competitor::Sportybet, Competitor::Bet9ja];
}

impl From<Competitor> for Platform {
    fn from(c: Competitor) -> Self {
        match c {
            Competitor::Sportybet => Platform::Sportybet,
            Competitor::Bet9ja => Platform::Bet9ja,
        }
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Platform::from(*self).fmt(f)
    }
}
