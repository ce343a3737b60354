//! # cellfmt-core
//!
//! Core types for the cellfmt pattern parsing library.
//!
//! This crate provides the pieces shared by the compiler and its callers:
//! - [`SymbolContext`] and [`Symbols`] - locale symbols (separators, signs, calendar names)
//! - [`YearWindow`] - two-digit year resolution
//! - [`PatternKind`] - number, date, time or date-time
//! - [`tokenize`] and [`FormatToken`] - the pattern-text tokenizer
//! - [`Error`] - compile and parse errors
//!
//! ## Example
//!
//! ```rust
//! use cellfmt_core::{tokenize, FormatTokenKind, SymbolContext, Symbols};
//!
//! let tokens = tokenize("dd/mm/yyyy").unwrap();
//! assert_eq!(tokens[0].kind, FormatTokenKind::Day { width: 2 });
//!
//! let symbols = Symbols::de_de();
//! assert_eq!(symbols.decimal_separator(), ',');
//! ```

pub mod error;
pub mod kind;
pub mod symbols;
pub mod token;
pub mod tokenizer;

pub use error::{Error, Result};
pub use kind::{DigitPlaceholder, PatternKind, Sign};
pub use symbols::{SymbolContext, Symbols, YearWindow};
pub use token::{FormatToken, FormatTokenKind};
pub use tokenizer::tokenize;

/// Number of decimal digits kept for fractional seconds (nanoseconds)
pub const FRACTION_DIGITS: usize = 9;
