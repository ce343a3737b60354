//! Format tokens produced by the tokenizer

use crate::kind::{DigitPlaceholder, Sign};

/// One lexical element of a pattern string
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatTokenKind {
    /// A run of identical digit placeholders (`###`, `00`, `?`)
    Digits {
        placeholder: DigitPlaceholder,
        width: usize,
    },
    /// `.`
    DecimalPoint,
    /// `,`
    GroupSeparator,
    /// `$`
    Currency,
    /// `%`
    Percent,
    /// `E+`, `E-`, `e+`, `e-`
    Exponent,
    /// `+` or `-`
    Sign(Sign),
    /// A run of spaces, or `_x` (one column of padding)
    Whitespace { width: usize },
    /// `*x`: repeat `x` to fill the cell
    Fill(char),
    /// `\x`
    Escape(char),
    /// `"..."`
    Quoted(String),
    /// Any character without a special meaning
    Literal(char),
    /// `[Red]`, `[$-409]`, ...: rendering directives
    Bracket(String),
    /// `;`
    Separator,
    /// `@`
    TextPlaceholder,
    /// `General`
    General,
    /// `y`, `yy`, `yyyy`
    Year { width: usize },
    /// `m` .. `mmmmm` when it denotes a month
    Month { width: usize },
    /// `d` .. `dddd`
    Day { width: usize },
    /// `h`, `hh`
    Hour { width: usize },
    /// `m`, `mm` when it denotes a minute
    Minute { width: usize },
    /// `s`, `ss`
    Second { width: usize },
    /// `.0`, `.00`, ... directly after seconds; `width` counts the zeros
    FractionalSecond { width: usize },
    /// `AM/PM` or, when `short`, `A/P`
    AmPm { short: bool },
}

impl FormatTokenKind {
    /// `true` for tokens that denote a date or time field
    pub fn is_temporal_field(&self) -> bool {
        matches!(
            self,
            FormatTokenKind::Year { .. }
                | FormatTokenKind::Month { .. }
                | FormatTokenKind::Day { .. }
                | FormatTokenKind::Hour { .. }
                | FormatTokenKind::Minute { .. }
                | FormatTokenKind::Second { .. }
                | FormatTokenKind::FractionalSecond { .. }
                | FormatTokenKind::AmPm { .. }
        )
    }
}

/// A token together with its verbatim source text and character offset
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatToken {
    pub kind: FormatTokenKind,
    pub text: String,
    /// Character offset of the first character of `text` in the pattern
    pub offset: usize,
}

impl FormatToken {
    pub fn new<S: Into<String>>(kind: FormatTokenKind, text: S, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// Number of characters this token spans in the pattern
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
