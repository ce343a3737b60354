//! Pattern kinds and the small enums shared by the tokenizer and the parser

use std::fmt;
use std::str::FromStr;

/// The value domain a pattern is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternKind {
    /// Numbers (`#,##0.00`, `0%`, `0.00E+00`)
    Number,
    /// Calendar dates (`dd/mm/yyyy`)
    Date,
    /// Times of day (`hh:mm:ss.000 AM/PM`)
    Time,
    /// Date and time combined (`yyyy-mm-dd hh:mm`)
    DateTime,
}

impl PatternKind {
    /// `true` if date fields (day, month, year) are legal in this kind
    pub fn has_date_fields(self) -> bool {
        matches!(self, PatternKind::Date | PatternKind::DateTime)
    }

    /// `true` if time fields (hour, minute, second, am/pm) are legal in this kind
    pub fn has_time_fields(self) -> bool {
        matches!(self, PatternKind::Time | PatternKind::DateTime)
    }

    /// `true` for the three calendar kinds
    pub fn is_temporal(self) -> bool {
        self != PatternKind::Number
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Number => "number",
            PatternKind::Date => "date",
            PatternKind::Time => "time",
            PatternKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "number" | "num" => Ok(PatternKind::Number),
            "date" => Ok(PatternKind::Date),
            "time" => Ok(PatternKind::Time),
            "datetime" | "date-time" | "date_time" => Ok(PatternKind::DateTime),
            other => Err(format!("unknown pattern kind: {other}")),
        }
    }
}

/// The three digit placeholders of a number pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigitPlaceholder {
    /// `#` - optional digit
    Hash,
    /// `0` - zero-padded digit
    Zero,
    /// `?` - space-padded digit
    Space,
}

impl DigitPlaceholder {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(DigitPlaceholder::Hash),
            '0' => Some(DigitPlaceholder::Zero),
            '?' => Some(DigitPlaceholder::Space),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            DigitPlaceholder::Hash => '#',
            DigitPlaceholder::Zero => '0',
            DigitPlaceholder::Space => '?',
        }
    }
}

/// Sign of a mantissa or exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}
