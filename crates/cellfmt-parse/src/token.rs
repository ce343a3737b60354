//! Tokens emitted while parsing text against a pattern
//!
//! Each token carries the exact slice of input it consumed, so the tokens of
//! a successful parse concatenate back to the consumed text.

use cellfmt_core::Sign;

/// A date or time field that is read as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateField {
    Day,
    Month,
    Year,
    Hour,
    Minute,
    Second,
}

/// What an emitted token stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Digits,
    DecimalSeparator,
    GroupSeparator,
    Sign(Sign),
    Currency,
    Percent,
    Exponent,
    Whitespace,
    Text,
    Escaped,
    Fill,
    Field(DateField),
    MonthName,
    MonthAbbreviation,
    DayName,
    DayAbbreviation,
    AmPm,
    FractionalSecond,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, text: S) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Concatenate the source text of a token list
pub fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
