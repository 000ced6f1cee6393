//! Oddsmap - cross-bookmaker market normalization.
//!
//! Translates betting markets published by competitor sportsbooks into the
//! vocabulary of a reference sportsbook, so prices for the same market can be
//! compared side by side.
//!
//! - **Betpawa** is the reference: numeric market ids, outcome names such as
//!   `"1"`, `"X"`, `"Over"`.
//! - **Sportybet** sends numeric market ids, outcome descriptors and compound
//!   specifiers (`total=2.5|hcp=0:1`).
//! - **Bet9ja** flattens everything into keys such as `S_OU@2.5_O`.
//!
//! # Modules
//!
//! - [`domain`] - Platforms, mapping definitions, raw and mapped market types
//! - [`parse`] - Total parsers for Bet9ja keys, Sportybet specifiers, handicaps
//! - [`registry`] - Immutable, indexed market catalog built once per process
//! - [`resolve`] - Pairing raw outcomes with declared outcomes
//! - [`mapper`] - Per-platform assemblers, Bet9ja batch mapping, dispatcher
//! - [`config`] - TOML configuration and logging setup
//! - [`error`] - Error types for the crate
//! - [`cli`] - The `oddsmap` command-line interface
//!
//! # Example
//!
//! ```
//! use oddsmap::mapper::MarketMapper;
//!
//! let mapper = MarketMapper::global();
//! let market = mapper
//!     .map_sportybet("18", Some("total=2.5"), [("12", "1.85"), ("13", "1.95")])
//!     .unwrap();
//!
//! assert_eq!(market.betpawa_market_id(), Some("5000"));
//! assert_eq!(market.line(), Some(2.5));
//! assert_eq!(market.outcomes()[0].betpawa_name(), Some("Over"));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod mapper;
pub mod parse;
pub mod registry;
pub mod resolve;

pub use mapper::{map_batch_flattened, map_dispatch, map_single};
pub use parse::{parse_bet9ja_key, parse_specifier};
