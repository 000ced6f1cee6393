use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{ParamKind, Platform};

/// Stable machine-readable code for a [`MappingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    UnknownMarket,
    UnknownParamMarket,
    InvalidSpecifier,
    NoMatchingOutcomes,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnknownMarket => "UNKNOWN_MARKET",
            ErrorCode::UnknownParamMarket => "UNKNOWN_PARAM_MARKET",
            ErrorCode::InvalidSpecifier => "INVALID_SPECIFIER",
            ErrorCode::NoMatchingOutcomes => "NO_MATCHING_OUTCOMES",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures of single-market assembly.
///
/// Parsers and batch mapping never return these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    #[error("unknown {platform} market '{market}'")]
    UnknownMarket { platform: Platform, market: String },

    #[error("{platform} market '{market}' expects {expected}, got parameter '{param}'")]
    UnknownParamMarket {
        platform: Platform,
        market: String,
        expected: &'static str,
        param: String,
    },

    #[error("invalid specifier for {platform} market '{market}': {reason}")]
    InvalidSpecifier {
        platform: Platform,
        market: String,
        reason: String,
    },

    #[error("no matching outcomes for {platform} market '{market}'")]
    NoMatchingOutcomes { platform: Platform, market: String },
}

impl MappingError {
    pub(crate) fn unknown_param(
        platform: Platform,
        market: &str,
        expected: ParamKind,
        param: &str,
    ) -> Self {
        MappingError::UnknownParamMarket {
            platform,
            market: market.to_owned(),
            expected: expected.label(),
            param: param.to_owned(),
        }
    }

    pub(crate) fn invalid_specifier(platform: Platform, market: &str, reason: impl Into<String>) -> Self {
        MappingError::InvalidSpecifier {
            platform,
            market: market.to_owned(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            MappingError::UnknownMarket { .. } => ErrorCode::UnknownMarket,
            MappingError::UnknownParamMarket { .. } => ErrorCode::UnknownParamMarket,
            MappingError::InvalidSpecifier { .. } => ErrorCode::InvalidSpecifier,
            MappingError::NoMatchingOutcomes { .. } => ErrorCode::NoMatchingOutcomes,
        }
    }

    /// Raw market identifier the failure refers to.
    #[must_use]
    pub fn market(&self) -> &str {
        match self {
            MappingError::UnknownMarket { market, .. }
            | MappingError::UnknownParamMarket { market, .. }
            | MappingError::InvalidSpecifier { market, .. }
            | MappingError::NoMatchingOutcomes { market, .. } => market,
        }
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        match self {
            MappingError::UnknownMarket { platform, .. }
            | MappingError::UnknownParamMarket { platform, .. }
            | MappingError::InvalidSpecifier { platform, .. }
            | MappingError::NoMatchingOutcomes { platform, .. } => *platform,
        }
    }
}

/// Registry construction errors. The built-in catalog never produces these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("market mapping has an empty canonical id")]
    EmptyCanonicalId,

    #[error("duplicate canonical id '{0}'")]
    DuplicateCanonicalId(String),

    #[error("duplicate {platform} market id '{id}' (on '{first}' and '{second}')")]
    DuplicatePlatformId {
        platform: Platform,
        id: String,
        first: String,
        second: String,
    },

    #[error("market '{market}' declares position {position} more than once")]
    DuplicatePosition { market: String, position: usize },
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_screaming_snake_case() {
        let err = MappingError::UnknownMarket {
            platform: Platform::Bet9ja,
            market: "UNKNOWN".into(),
        };
        assert_eq!(err.code(), ErrorCode::UnknownMarket);
        assert_eq!(err.code().to_string(), "UNKNOWN_MARKET");
        assert_eq!(
            serde_json::to_string(&ErrorCode::NoMatchingOutcomes).unwrap(),
            "\"NO_MATCHING_OUTCOMES\""
        );
    }

    #[test]
    fn messages_name_platform_and_market() {
        let err = MappingError::unknown_param(Platform::Sportybet, "1", ParamKind::None, "total=2.5");
        assert_eq!(
            err.to_string(),
            "sportybet market '1' expects none, got parameter 'total=2.5'"
        );
        assert_eq!(err.market(), "1");
        assert_eq!(err.platform(), Platform::Sportybet);
    }

    #[test]
    fn mapping_error_converts_into_crate_error() {
        let err: Error = MappingError::NoMatchingOutcomes {
            platform: Platform::Bet9ja,
            market: "OU".into(),
        }
        .into();
        assert!(matches!(err, Error::Mapping(_)));
    }
}
