//! Value assembly: turning the accumulated fields of a matched alternative
//! into a typed value

mod number;
mod temporal;

pub use number::NumberAccumulator;
pub use temporal::TemporalFields;

use cellfmt_core::{PatternKind, SymbolContext};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;

/// The typed value computed from a successful parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParsedValue {
    Number(Decimal),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

impl ParsedValue {
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            ParsedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ParsedValue::Date(d) => Some(*d),
            ParsedValue::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            ParsedValue::Time(t) => Some(*t),
            ParsedValue::DateTime(dt) => Some(dt.time()),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            ParsedValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedValue::Number(n) => write!(f, "{n}"),
            ParsedValue::Date(d) => write!(f, "{d}"),
            ParsedValue::Time(t) => write!(f, "{t}"),
            ParsedValue::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

/// Build the value for a pattern kind; `None` when the fields do not form
/// a valid value
pub(crate) fn assemble(
    kind: PatternKind,
    number: &NumberAccumulator,
    temporal: &TemporalFields,
    ctx: &dyn SymbolContext,
) -> Option<ParsedValue> {
    match kind {
        PatternKind::Number => number.finish().map(ParsedValue::Number),
        PatternKind::Date => temporal.date(ctx).map(ParsedValue::Date),
        PatternKind::Time => temporal.time().map(ParsedValue::Time),
        PatternKind::DateTime => temporal.date_time(ctx).map(ParsedValue::DateTime),
    }
}
