//! Per-kind pattern wrappers
//!
//! Each wrapper compiles its pattern for one [`PatternKind`] and hands back
//! the parsed value as a plain Rust type instead of a [`ParsedValue`].
//!
//! ```rust
//! use cellfmt::{DatePattern, Symbols};
//! use chrono::NaiveDate;
//!
//! let pattern = DatePattern::compile("dd/mm/yyyy;yyyy/mm/dd").unwrap();
//! let date = pattern.parse("2000/12/31", &Symbols::en_us()).unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2000, 12, 31).unwrap());
//! ```

use cellfmt_core::{Error, PatternKind, Result, SymbolContext};
use cellfmt_parse::{ParseOutcome, ParsedValue, Pattern};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;

fn wrong_kind(pattern: &Pattern, expected: PatternKind) -> Error {
    Error::ValueKind {
        pattern: pattern.source().to_string(),
        expected,
    }
}

macro_rules! typed_pattern {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $value:ty, $extract:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(Pattern);

        impl $name {
            pub fn compile(text: &str) -> Result<Self> {
                Pattern::compile(text, $kind).map(Self)
            }

            pub fn pattern(&self) -> &Pattern {
                &self.0
            }

            /// Parse `text`, which must match completely
            pub fn parse(&self, text: &str, ctx: &dyn SymbolContext) -> Result<$value> {
                let outcome = self.0.parse_complete(text, ctx)?;
                self.value_of(&outcome)
            }

            /// Parse a prefix of `text`; returns the value and the unparsed rest
            pub fn parse_prefix<'t>(
                &self,
                text: &'t str,
                ctx: &dyn SymbolContext,
            ) -> Result<($value, &'t str)> {
                let outcome = self.0.parse(text, ctx)?;
                let value = self.value_of(&outcome)?;
                Ok((value, &text[outcome.consumed.len()..]))
            }

            /// Full parse result including the emitted tokens
            pub fn parse_outcome(&self, text: &str, ctx: &dyn SymbolContext) -> Result<ParseOutcome> {
                self.0.parse(text, ctx)
            }

            fn value_of(&self, outcome: &ParseOutcome) -> Result<$value> {
                outcome.value.$extract().ok_or_else(|| wrong_kind(&self.0, $kind))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::compile(s)
            }
        }

        impl From<$name> for Pattern {
            fn from(typed: $name) -> Pattern {
                typed.0
            }
        }
    };
}

typed_pattern!(
    /// A number pattern (`#,##0.00`, `0%`, `0.00E+00`, ...) producing [`Decimal`]s
    NumberPattern,
    PatternKind::Number,
    Decimal,
    as_number
);

typed_pattern!(
    /// A date pattern (`dd/mm/yyyy`, `mmmm d, yyyy`, ...)
    DatePattern,
    PatternKind::Date,
    NaiveDate,
    as_date
);

typed_pattern!(
    /// A time pattern (`hh:mm:ss.000`, `h:mm AM/PM`, ...)
    TimePattern,
    PatternKind::Time,
    NaiveTime,
    as_time
);

typed_pattern!(
    /// A combined date and time pattern
    DateTimePattern,
    PatternKind::DateTime,
    NaiveDateTime,
    as_date_time
);

/// Parse with a throwaway pattern of the given kind, requiring a complete
/// match
pub fn parse_value(pattern: &str, kind: PatternKind, text: &str, ctx: &dyn SymbolContext) -> Result<ParsedValue> {
    Pattern::compile(pattern, kind)?
        .parse_complete(text, ctx)
        .map(|outcome| outcome.value)
}
