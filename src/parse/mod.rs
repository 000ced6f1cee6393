//! Parsers for the platform string grammars.
//!
//! Every parser is total: malformed, oversized or empty input yields `None`,
//! never a panic or an error.

mod handicap;
mod key;
mod specifier;

pub use handicap::{parse_handicap, parse_line, ParsedHandicap};
pub use key::{parse_bet9ja_key, ParsedBet9jaKey, KEY_MAX_LEN};
pub use specifier::{parse_specifier, ParsedSpecifier, SPECIFIER_MAX_LEN};
