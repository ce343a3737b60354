//! Compiled patterns and the multi-alternative trial parser

use crate::assemble::{assemble, ParsedValue};
use crate::compiler::compile_alternatives;
use crate::component::Component;
use crate::cursor::Cursor;
use crate::request::{Mismatch, Request};
use crate::token::Token;
use crate::validator::validate;
use cellfmt_core::{tokenize, Error, FormatToken, PatternKind, Result, SymbolContext};
use std::fmt;

/// One `;`-separated sub-pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    components: Vec<Component>,
    source: String,
    offset: usize,
}

impl Alternative {
    pub fn new(components: Vec<Component>, source: String, offset: usize) -> Self {
        Self {
            components,
            source,
            offset,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Pattern text this alternative was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Character offset of [`source`](Self::source) in the full pattern
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Walk the components from `req.next` to the end, then assemble the
    /// value
    fn run(&self, kind: PatternKind, req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> std::result::Result<ParsedValue, Mismatch> {
        while let Some(component) = self.components.get(req.next) {
            component.match_at(req, cursor)?;
            req.next += 1;
        }
        assemble(kind, &req.number, &req.temporal, req.symbols).ok_or(Mismatch {
            position: cursor.position(),
            reason: "matched fields do not form a valid value",
        })
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Result of a successful parse
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOutcome {
    /// Index of the winning alternative
    pub alternative: usize,
    /// Emitted tokens; they concatenate to `consumed`
    pub tokens: Vec<Token>,
    pub consumed: String,
    /// Input left after the match
    pub remainder: String,
    pub value: ParsedValue,
}

/// A compiled format pattern.
///
/// Immutable after construction; one pattern can serve any number of
/// concurrent parses.
///
/// # Example
/// ```rust
/// use cellfmt_core::{PatternKind, Symbols};
/// use cellfmt_parse::Pattern;
///
/// let pattern = Pattern::compile("#,##0.00;(#,##0.00)", PatternKind::Number).unwrap();
/// let outcome = pattern.parse("1,234.50 USD", &Symbols::en_us()).unwrap();
/// assert_eq!(outcome.consumed, "1,234.50");
/// assert_eq!(outcome.remainder, " USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    kind: PatternKind,
    source: String,
    alternatives: Vec<Alternative>,
}

impl Pattern {
    /// Tokenize, validate and compile pattern text
    pub fn compile(text: &str, kind: PatternKind) -> Result<Self> {
        let tokens = tokenize(text)?;
        Self::from_tokens(text, &tokens, kind)
    }

    /// Validate and compile an already tokenized pattern
    pub fn from_tokens(text: &str, tokens: &[FormatToken], kind: PatternKind) -> Result<Self> {
        validate(text, tokens, kind)?;
        let alternatives = compile_alternatives(text, tokens, kind)?;
        if alternatives.is_empty() {
            return Err(Error::MalformedPattern {
                offset: 0,
                pattern: text.to_string(),
                reason: "empty pattern",
            });
        }
        log::debug!(
            "compiled {} pattern {:?} into {} alternative(s)",
            kind,
            text,
            alternatives.len()
        );
        Ok(Self {
            kind,
            source: text.to_string(),
            alternatives,
        })
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Parse a prefix of `text`; whatever follows the match is returned as
    /// the remainder
    pub fn parse(&self, text: &str, ctx: &dyn SymbolContext) -> Result<ParseOutcome> {
        let mut cursor = Cursor::new(text);
        self.parse_at(&mut cursor, ctx)
    }

    /// Parse at the cursor position, trying each alternative in order.
    ///
    /// On success the cursor sits after the match. On failure it is back
    /// where it started.
    pub fn parse_at(&self, cursor: &mut Cursor<'_>, ctx: &dyn SymbolContext) -> Result<ParseOutcome> {
        let start = cursor.mark();

        for (index, alternative) in self.alternatives.iter().enumerate() {
            let mut req = Request::new(ctx);
            match alternative.run(self.kind, &mut req, cursor) {
                Ok(value) => {
                    log::debug!(
                        "pattern {:?}: alternative {} matched {:?}",
                        self.source,
                        index,
                        cursor.since(start)
                    );
                    return Ok(ParseOutcome {
                        alternative: index,
                        tokens: req.tokens,
                        consumed: cursor.since(start).to_string(),
                        remainder: cursor.remainder().to_string(),
                        value,
                    });
                }
                Err(mismatch) => {
                    log::trace!(
                        "pattern {:?}: alternative {} failed at component {}, byte {}: {}",
                        self.source,
                        index,
                        req.next,
                        mismatch.position,
                        mismatch.reason
                    );
                    cursor.reset(start);
                }
            }
        }

        Err(Error::NoMatch {
            position: cursor.position(),
            pattern: self.source.clone(),
        })
    }

    /// Parse `text` and require the match to cover all of it
    pub fn parse_complete(&self, text: &str, ctx: &dyn SymbolContext) -> Result<ParseOutcome> {
        let outcome = self.parse(text, ctx)?;
        if !outcome.remainder.is_empty() {
            return Err(Error::TrailingText {
                position: outcome.consumed.len(),
                remainder: outcome.remainder,
            });
        }
        Ok(outcome)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Pattern {
    type Err = Error;

    /// Compile as a number pattern
    fn from_str(s: &str) -> Result<Self> {
        Self::compile(s, PatternKind::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{concat, TokenKind};
    use cellfmt_core::Symbols;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn number(pattern: &str, text: &str) -> Result<ParseOutcome> {
        Pattern::compile(pattern, PatternKind::Number)?.parse(text, &Symbols::en_us())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_single_digit() {
        let outcome = number("#", "0").unwrap();
        assert_eq!(outcome.tokens, vec![Token::new(TokenKind::Digits, "0")]);
        assert_eq!(outcome.value, ParsedValue::Number(Decimal::ZERO));
    }

    #[test]
    fn test_currency_and_decimals() {
        let outcome = number("$#.00", "$1.23").unwrap();
        assert_eq!(outcome.value.as_number(), Some(dec("1.23")));
        assert_eq!(concat(&outcome.tokens), "$1.23");
    }

    #[test]
    fn test_first_alternative_wins() {
        let outcome = number("0;$0", "1").unwrap();
        assert_eq!(outcome.alternative, 0);
        assert_eq!(outcome.value.as_number(), Some(Decimal::ONE));
    }

    #[test]
    fn test_falls_through_to_later_alternative() {
        let outcome = number("0.00;(0.00)", "(4.50)").unwrap();
        assert_eq!(outcome.alternative, 1);
        assert_eq!(outcome.value.as_number(), Some(dec("4.5")));
    }

    #[test]
    fn test_percent_scales() {
        let outcome = number("#%", "123%").unwrap();
        assert_eq!(outcome.value.as_number(), Some(dec("1.23")));
    }

    #[test]
    fn test_grouped_number_with_remainder() {
        let outcome = number("#,##0.00", "-1,234,567.891 left").unwrap();
        assert_eq!(outcome.value.as_number(), Some(dec("-1234567.891")));
        assert_eq!(outcome.consumed, "-1,234,567.891");
        assert_eq!(outcome.remainder, " left");
    }

    #[test]
    fn test_scientific() {
        let outcome = number("0.00E+00", "1.5E-03").unwrap();
        assert_eq!(outcome.value.as_number(), Some(dec("0.0015")));
    }

    #[test]
    fn test_literal_signs_in_digit_groups() {
        let outcome = number("000-00-0000", "123-45-6789").unwrap();
        assert_eq!(outcome.value.as_number(), Some(dec("123456789")));
    }

    #[test]
    fn test_no_digits_is_no_match() {
        let err = number("#", "abc").unwrap_err();
        assert_eq!(
            err,
            Error::NoMatch {
                position: 0,
                pattern: "#".into()
            }
        );
    }

    #[test]
    fn test_group_after_decimal_fails() {
        assert!(number("#,##0.00", "1.2,3").is_ok_and(|o| o.remainder == ",3"));
        assert!(number("0.0,0", "1.2,3").is_err());
    }

    #[test]
    fn test_cursor_restored_on_failure() {
        let pattern = Pattern::compile("0.00", PatternKind::Number).unwrap();
        let mut cursor = Cursor::new("xx1");
        cursor.bump();
        assert!(pattern.parse_at(&mut cursor, &Symbols::en_us()).is_err());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_parse_at_advances() {
        let pattern = Pattern::compile("0", PatternKind::Number).unwrap();
        let mut cursor = Cursor::new("12 34");
        let first = pattern.parse_at(&mut cursor, &Symbols::en_us()).unwrap();
        assert_eq!(first.value.as_number(), Some(Decimal::from(12)));
        assert!(cursor.eat(' '));
        let second = pattern.parse_at(&mut cursor, &Symbols::en_us()).unwrap();
        assert_eq!(second.value.as_number(), Some(Decimal::from(34)));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_parse_complete() {
        let pattern = Pattern::compile("0", PatternKind::Number).unwrap();
        let err = pattern.parse_complete("12ab", &Symbols::en_us()).unwrap_err();
        assert_eq!(
            err,
            Error::TrailingText {
                position: 2,
                remainder: "ab".into()
            }
        );
        assert!(pattern.parse_complete("12", &Symbols::en_us()).is_ok());
    }

    #[test]
    fn test_date_alternatives() {
        let pattern = Pattern::compile("dd/mm/yyyy;yyyy/mm/dd", PatternKind::Date).unwrap();
        let outcome = pattern.parse("2000/12/31", &Symbols::en_us()).unwrap();
        assert_eq!(outcome.alternative, 1);
        assert_eq!(outcome.value.as_date(), NaiveDate::from_ymd_opt(2000, 12, 31));
    }

    #[test]
    fn test_invalid_calendar_date_fails() {
        let pattern = Pattern::compile("dd/mm/yyyy", PatternKind::Date).unwrap();
        assert!(pattern.parse("31/02/2001", &Symbols::en_us()).is_err());
    }

    #[test]
    fn test_time_with_fraction() {
        let pattern = Pattern::compile("hh:mm:ss.000", PatternKind::Time).unwrap();
        let outcome = pattern.parse("11:58:59.12", &Symbols::en_us()).unwrap();
        assert_eq!(
            outcome.value.as_time(),
            NaiveTime::from_hms_nano_opt(11, 58, 59, 120_000_000)
        );
    }

    #[test]
    fn test_am_pm() {
        let pattern = Pattern::compile("h:mm AM/PM", PatternKind::Time).unwrap();
        let outcome = pattern.parse("7:05 pm", &Symbols::en_us()).unwrap();
        assert_eq!(outcome.value.as_time(), NaiveTime::from_hms_opt(19, 5, 0));
        assert!(pattern.parse("13:05 PM", &Symbols::en_us()).is_err());
    }

    #[test]
    fn test_locale_symbols() {
        let pattern = Pattern::compile("#,##0.00", PatternKind::Number).unwrap();
        let outcome = pattern.parse("1.234,5", &Symbols::de_de()).unwrap();
        assert_eq!(outcome.value.as_number(), Some(dec("1234.5")));
    }

    #[test]
    fn test_display_and_accessors() {
        let pattern: Pattern = "0;-0;".parse().unwrap();
        assert_eq!(pattern.to_string(), "0;-0;");
        assert_eq!(pattern.kind(), PatternKind::Number);
        assert_eq!(pattern.alternatives().len(), 2);
        assert_eq!(pattern.alternatives()[1].to_string(), "-0");
    }

    #[test]
    fn test_compile_errors() {
        assert!(matches!(
            Pattern::compile("dd/mm/$yyyy", PatternKind::Date),
            Err(Error::InvalidPatternToken { offset: 6, .. })
        ));
        assert!(matches!(
            Pattern::compile("\"open", PatternKind::Number),
            Err(Error::MalformedPattern { .. })
        ));
    }
}
