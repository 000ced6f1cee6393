//! Parameter validation against a market's declared [`ParamKind`].

use crate::domain::{HandicapStyle, MappedHandicap, MarketMapping, ParamKind, Platform};
use crate::error::MappingError;
use crate::parse::{parse_handicap, parse_line, ParsedHandicap};

/// A validated market parameter.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MarketParam {
    None,
    Line(f64),
    Handicap(ParsedHandicap),
    Variant(String),
}

impl MarketParam {
    pub(crate) fn line(&self) -> Option<f64> {
        match self {
            MarketParam::Line(v) => Some(*v),
            _ => None,
        }
    }

    pub(crate) fn handicap(&self) -> Option<MappedHandicap> {
        match self {
            MarketParam::Handicap(h) => Some(h.to_mapped()),
            _ => None,
        }
    }

    pub(crate) fn variant(&self) -> Option<&str> {
        match self {
            MarketParam::Variant(v) => Some(v),
            _ => None,
        }
    }
}

/// Validate a bare parameter token, as carried by Bet9ja `@<PARAM>` segments
/// and Betpawa line/handicap fields.
pub(crate) fn token_param(
    mapping: &MarketMapping,
    platform: Platform,
    market: &str,
    raw: Option<&str>,
) -> Result<MarketParam, MappingError> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty());
    let kind = mapping.param_for(platform);

    match (kind, raw) {
        (ParamKind::None, None) => Ok(MarketParam::None),
        (ParamKind::None, Some(param)) => {
            Err(MappingError::unknown_param(platform, market, kind, param))
        }
        (_, None) => Err(MappingError::invalid_specifier(
            platform,
            market,
            format!("missing {}", kind.label()),
        )),
        (ParamKind::Line, Some(param)) => parse_line(param).map(MarketParam::Line).ok_or_else(|| {
            MappingError::invalid_specifier(platform, market, format!("unparsable line '{param}'"))
        }),
        (ParamKind::Handicap(style), Some(param)) => {
            let handicap = parse_handicap(param).ok_or_else(|| {
                MappingError::invalid_specifier(
                    platform,
                    market,
                    format!("unparsable handicap '{param}'"),
                )
            })?;
            check_style(platform, market, style, handicap)
        }
        (ParamKind::Variant, Some(param)) => Ok(MarketParam::Variant(param.to_owned())),
    }
}

/// A handicap must be written in the style its market declares.
pub(crate) fn check_style(
    platform: Platform,
    market: &str,
    expected: HandicapStyle,
    handicap: ParsedHandicap,
) -> Result<MarketParam, MappingError> {
    if handicap.style == expected {
        return Ok(MarketParam::Handicap(handicap));
    }
    Err(MappingError::invalid_specifier(
        platform,
        market,
        format!(
            "expected {}, got '{}'",
            ParamKind::Handicap(expected).label(),
            handicap.raw
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn mapping(kind: ParamKind) -> MarketMapping {
        MarketMapping::builder("m", "Market")
            .bet9ja("M")
            .param(kind)
            .build()
    }

    fn code(result: Result<MarketParam, MappingError>) -> ErrorCode {
        result.unwrap_err().code()
    }

    #[test]
    fn unparameterized_market() {
        let m = mapping(ParamKind::None);
        assert_eq!(token_param(&m, Platform::Bet9ja, "M", None), Ok(MarketParam::None));
        assert_eq!(token_param(&m, Platform::Bet9ja, "M", Some("  ")), Ok(MarketParam::None));
        assert_eq!(
            code(token_param(&m, Platform::Bet9ja, "M", Some("2.5"))),
            ErrorCode::UnknownParamMarket
        );
    }

    #[test]
    fn line_market() {
        let m = mapping(ParamKind::Line);
        assert_eq!(token_param(&m, Platform::Bet9ja, "M", Some("2.5")), Ok(MarketParam::Line(2.5)));
        assert_eq!(code(token_param(&m, Platform::Bet9ja, "M", None)), ErrorCode::InvalidSpecifier);
        assert_eq!(
            code(token_param(&m, Platform::Bet9ja, "M", Some("two"))),
            ErrorCode::InvalidSpecifier
        );
    }

    #[test]
    fn handicap_market_checks_style() {
        let m = mapping(ParamKind::Handicap(HandicapStyle::European));
        let ok = token_param(&m, Platform::Bet9ja, "M", Some("0:1")).unwrap();
        assert_eq!(ok.handicap().map(|h| h.home()), Some(-1.0));

        let err = token_param(&m, Platform::Bet9ja, "M", Some("-1")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidSpecifier);
        assert!(err.to_string().contains("expected european handicap"));
    }

    #[test]
    fn variant_is_not_required_from_bet9ja() {
        let m = mapping(ParamKind::Variant);
        assert_eq!(token_param(&m, Platform::Bet9ja, "M", None), Ok(MarketParam::None));
    }
}
