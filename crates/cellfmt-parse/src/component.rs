//! Compiled pattern components
//!
//! A [`Component`] is immutable data describing one pattern element. All
//! parse state lives in the [`Request`]; [`Component::match_at`] reads the
//! input at the cursor, updates the request and either succeeds or reports a
//! [`Mismatch`](crate::request::Mismatch).

use crate::cursor::Cursor;
use crate::digits;
use crate::fields;
use crate::fraction;
use crate::request::{Request, Step};
use crate::token::{DateField, TokenKind};
use cellfmt_core::{DigitPlaceholder, Sign, SymbolContext};

/// Compile-time properties of a digit placeholder run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSpec {
    pub placeholder: DigitPlaceholder,
    /// Number of placeholder characters in the pattern
    pub width: usize,
    /// Consume any number of digits instead of at most `width`
    pub unbounded: bool,
    /// Last digit component of its segment (integer, fraction or exponent)
    pub closes_segment: bool,
    /// Accept group separators between digits
    pub grouping: bool,
}

impl DigitSpec {
    pub fn new(placeholder: DigitPlaceholder, width: usize) -> Self {
        Self {
            placeholder,
            width: width.max(1),
            unbounded: false,
            closes_segment: false,
            grouping: false,
        }
    }

    /// A zero-width run may only fail for a closing `0`
    pub fn is_mandatory(&self) -> bool {
        self.placeholder == DigitPlaceholder::Zero && self.closes_segment
    }
}

/// Where a named choice takes its candidate strings from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceSource {
    MonthNames,
    MonthAbbreviations,
    DayNames,
    DayAbbreviations,
    /// Full am/pm strings
    AmPm,
    /// First letter of each am/pm string (`A/P`)
    AmPmLetter,
}

impl ChoiceSource {
    pub fn candidates(self, ctx: &dyn SymbolContext) -> Vec<String> {
        match self {
            ChoiceSource::MonthNames => ctx.month_names().to_vec(),
            ChoiceSource::MonthAbbreviations => ctx.month_name_abbreviations().to_vec(),
            ChoiceSource::DayNames => ctx.day_names().to_vec(),
            ChoiceSource::DayAbbreviations => ctx.day_name_abbreviations().to_vec(),
            ChoiceSource::AmPm => ctx.am_pms().to_vec(),
            ChoiceSource::AmPmLetter => ctx
                .am_pms()
                .iter()
                .map(|s| s.chars().take(1).collect())
                .collect(),
        }
    }

    /// Kind of the token emitted for a match
    pub fn token_kind(self) -> TokenKind {
        match self {
            ChoiceSource::MonthNames => TokenKind::MonthName,
            ChoiceSource::MonthAbbreviations => TokenKind::MonthAbbreviation,
            ChoiceSource::DayNames => TokenKind::DayName,
            ChoiceSource::DayAbbreviations => TokenKind::DayAbbreviation,
            ChoiceSource::AmPm | ChoiceSource::AmPmLetter => TokenKind::AmPm,
        }
    }
}

/// A numeric date/time field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: DateField,
    pub min_digits: usize,
    pub max_digits: usize,
    /// Resolve the value through the context's two-digit year window
    pub two_digit_year: bool,
}

impl FieldSpec {
    pub fn new(field: DateField, min_digits: usize, max_digits: usize) -> Self {
        Self {
            field,
            min_digits,
            max_digits,
            two_digit_year: false,
        }
    }

    pub fn two_digit_year() -> Self {
        Self {
            two_digit_year: true,
            ..Self::new(DateField::Year, 2, 2)
        }
    }
}

/// One compiled matching unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// `#`, `0` or `?` run
    Digits(DigitSpec),
    DecimalSeparator,
    GroupSeparator,
    Currency,
    Percent,
    /// Exponent marker (`E+`)
    Exponent,
    Sign(Sign),
    /// Exactly `width` whitespace characters
    Whitespace { width: usize },
    /// Literal text that must appear verbatim
    Text(String),
    /// `\x`
    Escaped(char),
    /// Zero or more repetitions of a fill character
    Fill(char),
    /// One of a list of names (months, weekdays, am/pm)
    Choice(ChoiceSource),
    /// Day, month, year, hour, minute or second number
    Field(FieldSpec),
    /// Separator plus digit run below one second
    FractionalSecond,
    /// Free-form number
    General,
}

impl Component {
    /// Match this component at the cursor
    pub fn match_at(&self, req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
        match self {
            Component::Digits(spec) => digits::match_digits(spec, req, cursor),
            Component::DecimalSeparator => digits::match_decimal_separator(req, cursor),
            Component::GroupSeparator => digits::match_group_separator(req, cursor),
            Component::Exponent => digits::match_exponent(req, cursor),
            Component::Sign(sign) => digits::match_sign(*sign, req, cursor),
            Component::General => digits::match_general(req, cursor),
            Component::Currency => match_currency(req, cursor),
            Component::Percent => match_percent(req, cursor),
            Component::Whitespace { width } => match_whitespace(*width, req, cursor),
            Component::Text(text) => match cursor.eat_str(text) {
                Some(consumed) => {
                    req.emit(TokenKind::Text, consumed);
                    Ok(())
                }
                None => Request::mismatch(cursor, "expected literal text"),
            },
            Component::Escaped(c) => {
                let mark = cursor.mark();
                if !cursor.eat(*c) {
                    return Request::mismatch(cursor, "expected escaped character");
                }
                req.emit(TokenKind::Escaped, cursor.since(mark));
                Ok(())
            }
            Component::Fill(c) => {
                let mark = cursor.mark();
                while cursor.eat(*c) {}
                req.emit(TokenKind::Fill, cursor.since(mark));
                Ok(())
            }
            Component::Choice(source) => fields::match_choice(*source, req, cursor),
            Component::Field(spec) => fields::match_field(spec, req, cursor),
            Component::FractionalSecond => fraction::match_fractional_second(req, cursor),
        }
    }
}

fn match_currency(req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let ctx = req.symbols;
    let symbol = ctx.currency_symbol();
    if symbol.is_empty() {
        return Ok(());
    }
    match cursor.eat_str(symbol) {
        Some(consumed) => {
            req.emit(TokenKind::Currency, consumed);
            Ok(())
        }
        None => Request::mismatch(cursor, "expected currency symbol"),
    }
}

fn match_percent(req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let mark = cursor.mark();
    if !cursor.eat(req.symbols.percent_symbol()) {
        return Request::mismatch(cursor, "expected percent symbol");
    }
    req.number.percent_count += 1;
    req.emit(TokenKind::Percent, cursor.since(mark));
    Ok(())
}

fn match_whitespace(width: usize, req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let mark = cursor.mark();
    for _ in 0..width {
        match cursor.peek() {
            Some(c) if c.is_whitespace() => {
                cursor.bump();
            }
            _ => return Request::mismatch(cursor, "expected whitespace"),
        }
    }
    req.emit(TokenKind::Whitespace, cursor.since(mark));
    Ok(())
}
