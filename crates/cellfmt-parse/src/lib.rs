//! # cellfmt-parse
//!
//! Compiles spreadsheet cell-format patterns into parsers and runs them
//! against text.
//!
//! - [`Pattern`] - a compiled pattern with one or more [`Alternative`]s
//! - [`Component`] - a compiled matching unit (digit run, separator, field, ...)
//! - [`DigitMode`] - the number-parsing state machine
//! - [`ParseOutcome`] / [`ParsedValue`] - tokens and typed value of a match
//!
//! ## Example
//!
//! ```rust
//! use cellfmt_core::{PatternKind, Symbols};
//! use cellfmt_parse::Pattern;
//! use rust_decimal::Decimal;
//!
//! let pattern = Pattern::compile("$#.00", PatternKind::Number).unwrap();
//! let outcome = pattern.parse("$1.23", &Symbols::en_us()).unwrap();
//! assert_eq!(outcome.value.as_number(), Some(Decimal::new(123, 2)));
//! ```

pub mod assemble;
pub mod component;
pub mod compiler;
pub mod cursor;
pub mod digit_mode;
mod digits;
mod fields;
pub mod fraction;
pub mod pattern;
pub mod request;
pub mod token;
pub mod validator;

pub use assemble::{NumberAccumulator, ParsedValue, TemporalFields};
pub use component::{ChoiceSource, Component, DigitSpec, FieldSpec};
pub use cursor::{Cursor, Mark};
pub use digit_mode::{DigitMode, Segment};
pub use fraction::parse_fraction;
pub use pattern::{Alternative, ParseOutcome, Pattern};
pub use request::{Mismatch, Request};
pub use token::{concat, DateField, Token, TokenKind};
pub use validator::validate;
