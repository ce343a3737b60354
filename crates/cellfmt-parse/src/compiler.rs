//! Pattern compiler
//!
//! Turns a validated format-token list into one component list per
//! alternative.

use crate::component::{ChoiceSource, Component, DigitSpec, FieldSpec};
use crate::pattern::Alternative;
use crate::token::DateField;
use cellfmt_core::{Error, FormatToken, FormatTokenKind, PatternKind, Result};

/// Split `tokens` at every `;` and compile each alternative.
///
/// A trailing separator is ignored. Any other empty alternative is
/// malformed.
pub fn compile_alternatives(
    pattern: &str,
    tokens: &[FormatToken],
    kind: PatternKind,
) -> Result<Vec<Alternative>> {
    let groups = split_alternatives(tokens);
    let last = groups.len().saturating_sub(1);
    let mut alternatives = Vec::with_capacity(groups.len());

    for (index, (offset, group)) in groups.into_iter().enumerate() {
        if group.is_empty() {
            if index == last && index > 0 {
                continue;
            }
            return Err(Error::MalformedPattern {
                offset,
                pattern: pattern.to_string(),
                reason: "empty alternative",
            });
        }

        let components = match kind {
            PatternKind::Number => compile_number(pattern, group)?,
            _ => compile_temporal(pattern, group, kind)?,
        };
        let source = group.iter().map(|t| t.text.as_str()).collect();
        alternatives.push(Alternative::new(components, source, offset));
    }

    Ok(alternatives)
}

/// Token groups between separators, each with the character offset where it
/// starts
fn split_alternatives(tokens: &[FormatToken]) -> Vec<(usize, &[FormatToken])> {
    let mut groups = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    for (i, token) in tokens.iter().enumerate() {
        if token.kind == FormatTokenKind::Separator {
            groups.push((offset, &tokens[start..i]));
            start = i + 1;
            offset = token.offset + token.char_len();
        }
    }
    groups.push((offset, &tokens[start..]));
    groups
}

fn illegal(pattern: &str, token: &FormatToken) -> Error {
    Error::InvalidPatternToken {
        offset: token.offset,
        pattern: pattern.to_string(),
        token: token.text.clone(),
    }
}

/// Pattern tokens that mean the same thing for every kind
fn compile_shared(token: &FormatToken) -> Option<Option<Component>> {
    let component = match &token.kind {
        FormatTokenKind::Whitespace { width } => Some(Component::Whitespace { width: *width }),
        FormatTokenKind::Fill(c) => Some(Component::Fill(*c)),
        FormatTokenKind::Escape(c) => Some(Component::Escaped(*c)),
        FormatTokenKind::Quoted(text) if text.is_empty() => None,
        FormatTokenKind::Quoted(text) => Some(Component::Text(text.clone())),
        FormatTokenKind::Literal(c) => Some(Component::Text(c.to_string())),
        FormatTokenKind::Bracket(_) => None,
        _ => return None,
    };
    Some(component)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Integer,
    Fraction,
    Exponent,
}

/// Where the digit runs of one number alternative sit
#[derive(Debug, Default)]
struct DigitLayout {
    /// Segment of every token, by index
    segments: Vec<Segment>,
    first_integer: Option<usize>,
    last_integer: Option<usize>,
    last_fraction: Option<usize>,
    first_exponent: Option<usize>,
    last_exponent: Option<usize>,
    /// Last digit run or `General` of the mantissa
    last_mantissa: Option<usize>,
    grouped: bool,
}

impl DigitLayout {
    fn scan(tokens: &[FormatToken]) -> Self {
        let mut layout = DigitLayout::default();
        let mut segment = Segment::Integer;

        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                FormatTokenKind::DecimalPoint if segment == Segment::Integer => {
                    segment = Segment::Fraction;
                }
                FormatTokenKind::Exponent if segment != Segment::Exponent => {
                    segment = Segment::Exponent;
                }
                FormatTokenKind::GroupSeparator if segment == Segment::Integer => {
                    layout.grouped = true;
                }
                _ => {}
            }
            layout.segments.push(segment);

            let is_digits = matches!(token.kind, FormatTokenKind::Digits { .. });
            if !is_digits && token.kind != FormatTokenKind::General {
                continue;
            }
            match segment {
                Segment::Integer => {
                    layout.first_integer.get_or_insert(i);
                    layout.last_integer = Some(i);
                    layout.last_mantissa = Some(i);
                }
                Segment::Fraction => {
                    layout.last_fraction = Some(i);
                    layout.last_mantissa = Some(i);
                }
                Segment::Exponent => {
                    layout.first_exponent.get_or_insert(i);
                    layout.last_exponent = Some(i);
                }
            }
        }
        layout
    }

    fn segment(&self, index: usize) -> Segment {
        self.segments.get(index).copied().unwrap_or(Segment::Integer)
    }

    fn digit_spec(&self, index: usize, spec: DigitSpec) -> DigitSpec {
        let segment = self.segment(index);
        let (first, last) = match segment {
            Segment::Integer => (self.first_integer, self.last_integer),
            Segment::Fraction => (None, self.last_fraction),
            Segment::Exponent => (self.first_exponent, self.last_exponent),
        };
        let is_first = first == Some(index);
        let is_last = last == Some(index);
        DigitSpec {
            unbounded: match segment {
                Segment::Integer | Segment::Exponent => is_first,
                Segment::Fraction => is_last,
            },
            closes_segment: is_last,
            grouping: segment == Segment::Integer && is_first && self.grouped,
            ..spec
        }
    }

    /// A pattern sign is a sign only in front of its segment's digits or
    /// behind the whole mantissa. Anywhere else it is literal text.
    fn is_sign_position(&self, index: usize) -> bool {
        let leading = match self.segment(index) {
            Segment::Integer => self.first_integer.map_or(true, |first| index < first),
            Segment::Exponent => self.first_exponent.map_or(true, |first| index < first),
            Segment::Fraction => false,
        };
        let trailing = self.segment(index) != Segment::Exponent
            && self.last_mantissa.map_or(false, |last| index > last);
        leading || trailing
    }
}

fn compile_number(pattern: &str, tokens: &[FormatToken]) -> Result<Vec<Component>> {
    let layout = DigitLayout::scan(tokens);
    let mut components = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        if let Some(shared) = compile_shared(token) {
            components.extend(shared);
            continue;
        }
        let component = match &token.kind {
            FormatTokenKind::Digits { placeholder, width } => {
                Component::Digits(layout.digit_spec(i, DigitSpec::new(*placeholder, *width)))
            }
            FormatTokenKind::DecimalPoint => Component::DecimalSeparator,
            FormatTokenKind::GroupSeparator => Component::GroupSeparator,
            FormatTokenKind::Currency => Component::Currency,
            FormatTokenKind::Percent => Component::Percent,
            FormatTokenKind::Exponent => Component::Exponent,
            FormatTokenKind::General => Component::General,
            FormatTokenKind::Sign(sign) if layout.is_sign_position(i) => Component::Sign(*sign),
            FormatTokenKind::Sign(_) => Component::Text(token.text.clone()),
            _ => return Err(illegal(pattern, token)),
        };
        components.push(component);
    }
    Ok(components)
}

fn compile_temporal(pattern: &str, tokens: &[FormatToken], kind: PatternKind) -> Result<Vec<Component>> {
    let mut components = Vec::with_capacity(tokens.len());

    for token in tokens {
        if let Some(shared) = compile_shared(token) {
            components.extend(shared);
            continue;
        }
        let date = kind.has_date_fields();
        let time = kind.has_time_fields();
        let component = match token.kind {
            FormatTokenKind::DecimalPoint
            | FormatTokenKind::GroupSeparator
            | FormatTokenKind::Sign(_) => Component::Text(token.text.clone()),

            FormatTokenKind::Day { width } if date => match width {
                1 | 2 => Component::Field(FieldSpec::new(DateField::Day, 1, 2)),
                3 => Component::Choice(ChoiceSource::DayAbbreviations),
                _ => Component::Choice(ChoiceSource::DayNames),
            },
            FormatTokenKind::Month { width } if date => match width {
                1 | 2 => Component::Field(FieldSpec::new(DateField::Month, 1, 2)),
                3 => Component::Choice(ChoiceSource::MonthAbbreviations),
                _ => Component::Choice(ChoiceSource::MonthNames),
            },
            FormatTokenKind::Year { width } if date => match width {
                1 | 2 => Component::Field(FieldSpec::two_digit_year()),
                _ => Component::Field(FieldSpec::new(DateField::Year, 1, 4)),
            },

            FormatTokenKind::Hour { .. } if time => {
                Component::Field(FieldSpec::new(DateField::Hour, 1, 2))
            }
            FormatTokenKind::Minute { .. } if time => {
                Component::Field(FieldSpec::new(DateField::Minute, 1, 2))
            }
            FormatTokenKind::Second { .. } if time => {
                Component::Field(FieldSpec::new(DateField::Second, 1, 2))
            }
            FormatTokenKind::FractionalSecond { .. } if time => Component::FractionalSecond,
            FormatTokenKind::AmPm { short: false } if time => Component::Choice(ChoiceSource::AmPm),
            FormatTokenKind::AmPm { short: true } if time => Component::Choice(ChoiceSource::AmPmLetter),

            _ => return Err(illegal(pattern, token)),
        };
        components.push(component);
    }
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellfmt_core::{tokenize, DigitPlaceholder, Sign};
    use pretty_assertions::assert_eq;

    fn compile(pattern: &str, kind: PatternKind) -> Result<Vec<Alternative>> {
        compile_alternatives(pattern, &tokenize(pattern)?, kind)
    }

    fn components(pattern: &str, kind: PatternKind) -> Vec<Component> {
        let alternatives = compile(pattern, kind).unwrap();
        assert_eq!(alternatives.len(), 1);
        alternatives[0].components().to_vec()
    }

    fn digits(placeholder: DigitPlaceholder, width: usize) -> DigitSpec {
        DigitSpec::new(placeholder, width)
    }

    #[test]
    fn test_split_keeps_source_spans() {
        let alternatives = compile("#,##0.00;(#,##0.00);\"zero\"", PatternKind::Number).unwrap();
        let sources: Vec<_> = alternatives.iter().map(|a| a.source()).collect();
        assert_eq!(sources, vec!["#,##0.00", "(#,##0.00)", "\"zero\""]);
        assert_eq!(alternatives[1].offset(), 9);
        assert_eq!(alternatives[2].offset(), 20);
    }

    #[test]
    fn test_trailing_separator_is_ignored() {
        let alternatives = compile("0;", PatternKind::Number).unwrap();
        assert_eq!(alternatives.len(), 1);
    }

    #[test]
    fn test_empty_alternative_is_malformed() {
        let err = compile("0;;0", PatternKind::Number).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedPattern {
                offset: 2,
                pattern: "0;;0".into(),
                reason: "empty alternative",
            }
        );
        assert!(compile(";0", PatternKind::Number).is_err());
    }

    #[test]
    fn test_number_digit_layout() {
        let got = components("#,##0.00", PatternKind::Number);
        assert_eq!(
            got,
            vec![
                Component::Digits(DigitSpec {
                    unbounded: true,
                    grouping: true,
                    ..digits(DigitPlaceholder::Hash, 1)
                }),
                Component::GroupSeparator,
                Component::Digits(digits(DigitPlaceholder::Hash, 2)),
                Component::Digits(DigitSpec {
                    closes_segment: true,
                    ..digits(DigitPlaceholder::Zero, 1)
                }),
                Component::DecimalSeparator,
                Component::Digits(DigitSpec {
                    unbounded: true,
                    closes_segment: true,
                    ..digits(DigitPlaceholder::Zero, 2)
                }),
            ]
        );
    }

    #[test]
    fn test_scientific_layout() {
        let got = components("0.0E+00", PatternKind::Number);
        assert_eq!(got[3], Component::Exponent);
        assert_eq!(
            got[4],
            Component::Digits(DigitSpec {
                unbounded: true,
                closes_segment: true,
                ..digits(DigitPlaceholder::Zero, 2)
            })
        );
    }

    #[test]
    fn test_sign_placement() {
        let leading = components("-0", PatternKind::Number);
        assert_eq!(leading[0], Component::Sign(Sign::Negative));

        let trailing = components("0.00-", PatternKind::Number);
        assert_eq!(trailing[3], Component::Sign(Sign::Negative));

        let inner = components("000-00-0000", PatternKind::Number);
        assert_eq!(inner[1], Component::Text("-".into()));
        assert_eq!(inner[3], Component::Text("-".into()));
    }

    #[test]
    fn test_literals_and_directives() {
        let got = components("[Red]\"USD\" 0\\x*-_)", PatternKind::Number);
        assert_eq!(got[0], Component::Text("USD".into()));
        assert_eq!(got[1], Component::Whitespace { width: 1 });
        assert_eq!(got[3], Component::Escaped('x'));
        assert_eq!(got[4], Component::Fill('-'));
        assert_eq!(got[5], Component::Whitespace { width: 1 });
    }

    #[test]
    fn test_date_fields() {
        let got = components("dddd, mmmm d yy", PatternKind::Date);
        assert_eq!(
            got,
            vec![
                Component::Choice(ChoiceSource::DayNames),
                Component::Text(",".into()),
                Component::Whitespace { width: 1 },
                Component::Choice(ChoiceSource::MonthNames),
                Component::Whitespace { width: 1 },
                Component::Field(FieldSpec::new(DateField::Day, 1, 2)),
                Component::Whitespace { width: 1 },
                Component::Field(FieldSpec::two_digit_year()),
            ]
        );
    }

    #[test]
    fn test_time_fields() {
        let got = components("h:mm:ss.000 A/P", PatternKind::Time);
        assert_eq!(got[2], Component::Field(FieldSpec::new(DateField::Minute, 1, 2)));
        assert_eq!(got[5], Component::FractionalSecond);
        assert_eq!(got[7], Component::Choice(ChoiceSource::AmPmLetter));
    }

    #[test]
    fn test_illegal_token_in_mapping() {
        let err = compile("hh:mm", PatternKind::Date).unwrap_err();
        assert_eq!(err.pattern_offset(), Some(0));
    }
}
