//! # cellfmt
//!
//! Parse text with Excel-style cell format patterns.
//!
//! A format pattern such as `#,##0.00;(#,##0.00)` or `dd/mm/yyyy` is compiled
//! once into a parser and then run against any number of input strings.
//! Locale symbols (separators, currency, month names, ...) come from a
//! [`SymbolContext`] passed to every parse call.
//!
//! ## Features
//!
//! - Number patterns: digit placeholders, grouping, currency, percent,
//!   scientific notation, `General`
//! - Date, time and date-time patterns with month and weekday names, am/pm
//!   markers and fractional seconds
//! - `;`-separated alternatives, tried in order
//! - Exact decimal values via `rust_decimal`, calendar values via `chrono`
//! - Optional `serde` support for the public data types
//!
//! ## Example
//!
//! ```rust
//! use cellfmt::prelude::*;
//!
//! let symbols = Symbols::en_us();
//!
//! let amount = NumberPattern::compile("$#,##0.00").unwrap();
//! assert_eq!(amount.parse("$1,234.50", &symbols).unwrap().to_string(), "1234.50");
//!
//! let time = TimePattern::compile("h:mm AM/PM").unwrap();
//! assert_eq!(time.parse("7:05 PM", &symbols).unwrap().to_string(), "19:05:00");
//! ```

pub mod prelude;
pub mod typed;

pub use typed::{parse_value, DatePattern, DateTimePattern, NumberPattern, TimePattern};

// Re-export core types
pub use cellfmt_core::{
    tokenize, DigitPlaceholder, Error, FormatToken, FormatTokenKind, PatternKind, Result, Sign,
    SymbolContext, Symbols, YearWindow,
};

// Re-export the engine
pub use cellfmt_parse::{
    concat, parse_fraction, Alternative, Component, Cursor, DateField, ParseOutcome, ParsedValue,
    Pattern, Token, TokenKind,
};

// Value types used in the public API
pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
pub use rust_decimal::Decimal;
