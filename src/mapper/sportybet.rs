//! Sportybet market assembly.

use crate::domain::{MappedMarket, MarketMapping, ParamKind, Platform, RawOutcome};
use crate::error::MappingError;
use crate::parse::{parse_specifier, ParsedSpecifier};

use super::param::{check_style, MarketParam};
use super::{collect_outcomes, MarketMapper};

const PLATFORM: Platform = Platform::Sportybet;

impl MarketMapper<'_> {
    /// Map a Sportybet market keyed by its numeric id, with an optional
    /// compound specifier such as `total=2.5` or `hcp=0:1`.
    ///
    /// # Errors
    ///
    /// - `UNKNOWN_MARKET` if the id is not in the registry
    /// - `INVALID_SPECIFIER` if a required parameter is missing or malformed
    /// - `UNKNOWN_PARAM_MARKET` if the specifier carries a parameter the
    ///   market does not take
    /// - `NO_MATCHING_OUTCOMES` if no outcome could be paired
    pub fn map_sportybet<I, K, V>(
        &self,
        market_id: &str,
        specifier: Option<&str>,
        outcomes: I,
    ) -> Result<MappedMarket, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawOutcome>,
    {
        let market_id = market_id.trim();
        let mapping = self.lookup(PLATFORM, market_id)?;
        let param = specifier_param(mapping, market_id, specifier)?;
        self.assemble(mapping, PLATFORM, market_id, &param, &collect_outcomes(outcomes))
    }
}

fn specifier_param(
    mapping: &MarketMapping,
    market: &str,
    specifier: Option<&str>,
) -> Result<MarketParam, MappingError> {
    let kind = mapping.param_for(PLATFORM);
    let raw = specifier.map(str::trim).filter(|s| !s.is_empty());

    let spec = match raw {
        None => None,
        Some(raw) => Some(parse_specifier(raw).ok_or_else(|| {
            MappingError::invalid_specifier(PLATFORM, market, "specifier too long")
        })?),
    };
    let Some(spec) = spec else {
        return match kind {
            ParamKind::None => Ok(MarketParam::None),
            _ => Err(missing(kind, market)),
        };
    };

    match kind {
        ParamKind::None => match foreign(&spec, &["total", "hcp", "variant"]) {
            Some(key) => Err(MappingError::unknown_param(PLATFORM, market, kind, &param_text(&spec, key))),
            None => Ok(MarketParam::None),
        },
        ParamKind::Line => {
            if let Some(total) = spec.total {
                return Ok(MarketParam::Line(total));
            }
            require(&spec, kind, market, "total", &["hcp", "variant"])
        }
        ParamKind::Handicap(style) => {
            if let Some(handicap) = spec.handicap.clone() {
                return check_style(PLATFORM, market, style, handicap);
            }
            require(&spec, kind, market, "hcp", &["total", "variant"])
        }
        ParamKind::Variant => {
            if let Some(variant) = spec.variant.clone() {
                return Ok(MarketParam::Variant(variant));
            }
            require(&spec, kind, market, "variant", &["total", "hcp"])
        }
    }
}

/// The wanted key did not yield a value. Classify why.
fn require(
    spec: &ParsedSpecifier,
    kind: ParamKind,
    market: &str,
    wanted: &str,
    others: &[&str],
) -> Result<MarketParam, MappingError> {
    if spec.mentions(wanted) {
        return Err(MappingError::invalid_specifier(
            PLATFORM,
            market,
            format!("unparsable {wanted} in '{}'", spec.raw),
        ));
    }
    if let Some(key) = foreign(spec, others) {
        return Err(MappingError::unknown_param(PLATFORM, market, kind, &param_text(spec, key)));
    }
    Err(missing(kind, market))
}

fn foreign<'k>(spec: &ParsedSpecifier, keys: &[&'k str]) -> Option<&'k str> {
    keys.iter().copied().find(|key| spec.mentions(key))
}

fn param_text(spec: &ParsedSpecifier, key: &str) -> String {
    spec.raw
        .split('|')
        .map(str::trim)
        .find(|segment| {
            segment
                .split_once('=')
                .is_some_and(|(k, _)| k.trim().eq_ignore_ascii_case(key))
        })
        .unwrap_or(&spec.raw)
        .to_owned()
}

fn missing(kind: ParamKind, market: &str) -> MappingError {
    MappingError::invalid_specifier(PLATFORM, market, format!("missing {}", kind.label()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HandicapStyle;
    use crate::error::ErrorCode;

    fn mapping(kind: ParamKind) -> MarketMapping {
        MarketMapping::builder("m", "Market")
            .sportybet("1")
            .param(kind)
            .build()
    }

    fn code(kind: ParamKind, specifier: Option<&str>) -> ErrorCode {
        specifier_param(&mapping(kind), "1", specifier).unwrap_err().code()
    }

    #[test]
    fn line_from_total() {
        let param = specifier_param(&mapping(ParamKind::Line), "18", Some("total=2.5")).unwrap();
        assert_eq!(param, MarketParam::Line(2.5));
    }

    #[test]
    fn line_alongside_other_segments() {
        let param =
            specifier_param(&mapping(ParamKind::Line), "18", Some("goalnr=1|total=1.5")).unwrap();
        assert_eq!(param.line(), Some(1.5));
    }

    #[test]
    fn missing_required_param() {
        assert_eq!(code(ParamKind::Line, None), ErrorCode::InvalidSpecifier);
        assert_eq!(code(ParamKind::Line, Some("")), ErrorCode::InvalidSpecifier);
        assert_eq!(code(ParamKind::Variant, Some("goalnr=2")), ErrorCode::InvalidSpecifier);
    }

    #[test]
    fn unparsable_required_param() {
        assert_eq!(code(ParamKind::Line, Some("total=abc")), ErrorCode::InvalidSpecifier);
        assert_eq!(
            code(ParamKind::Handicap(HandicapStyle::Asian), Some("hcp=x")),
            ErrorCode::InvalidSpecifier
        );
    }

    #[test]
    fn wrong_handicap_style() {
        assert_eq!(
            code(ParamKind::Handicap(HandicapStyle::Asian), Some("hcp=0:1")),
            ErrorCode::InvalidSpecifier
        );
    }

    #[test]
    fn foreign_param_kind() {
        assert_eq!(code(ParamKind::Line, Some("hcp=0:1")), ErrorCode::UnknownParamMarket);
        assert_eq!(code(ParamKind::None, Some("total=2.5")), ErrorCode::UnknownParamMarket);
    }

    #[test]
    fn foreign_param_reports_segment() {
        let err = specifier_param(&mapping(ParamKind::None), "1", Some("goalnr=1|total=2.5"))
            .unwrap_err();
        match err {
            MappingError::UnknownParamMarket { param, expected, .. } => {
                assert_eq!(param, "total=2.5");
                assert_eq!(expected, "none");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn incidental_segments_are_tolerated() {
        let param =
            specifier_param(&mapping(ParamKind::None), "8", Some("goalnr=2")).unwrap();
        assert_eq!(param, MarketParam::None);
    }

    #[test]
    fn variant_from_specifier() {
        let param = specifier_param(
            &mapping(ParamKind::Variant),
            "45",
            Some("variant=sr:correct_score:max:6"),
        )
        .unwrap();
        assert_eq!(param.variant(), Some("sr:correct_score:max:6"));
    }
}
