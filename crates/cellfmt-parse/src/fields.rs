//! Date and time field components

use crate::component::{ChoiceSource, FieldSpec};
use crate::cursor::Cursor;
use crate::request::{Request, Step};
use crate::token::{DateField, TokenKind};

pub(crate) fn match_field(spec: &FieldSpec, req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let ctx = req.symbols;
    let mark = cursor.mark();
    let mut value: i32 = 0;
    let mut count = 0;
    while count < spec.max_digits {
        let Some(digit) = cursor.peek().and_then(|c| ctx.digit_value(c)) else {
            break;
        };
        cursor.bump();
        value = value * 10 + digit as i32;
        count += 1;
    }
    if count < spec.min_digits {
        return Request::mismatch(cursor, "too few digits for date/time field");
    }

    if spec.two_digit_year {
        value = ctx.two_digit_year_window().resolve(value as u32);
    }
    if !req.temporal.set(spec.field, value) {
        return Request::mismatch(cursor, "conflicting date/time field");
    }
    req.emit(TokenKind::Field(spec.field), cursor.since(mark));
    Ok(())
}

/// Match the longest candidate name, ignoring case. Ties go to the earlier
/// candidate.
pub(crate) fn match_choice(source: ChoiceSource, req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let candidates = source.candidates(req.symbols);
    let mut best: Option<(usize, usize)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        if let Some(len) = cursor.match_ignore_case(candidate) {
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((index, len));
            }
        }
    }
    let Some((index, len)) = best else {
        return Request::mismatch(cursor, "no name matches");
    };

    let recorded = match source {
        ChoiceSource::MonthNames | ChoiceSource::MonthAbbreviations => {
            req.temporal.set(DateField::Month, index as i32 + 1)
        }
        ChoiceSource::AmPm | ChoiceSource::AmPmLetter => req.temporal.set_pm(index == 1),
        // weekday names are matched but do not contribute to the value
        ChoiceSource::DayNames | ChoiceSource::DayAbbreviations => true,
    };
    if !recorded {
        return Request::mismatch(cursor, "conflicting date/time field");
    }

    let consumed = cursor.take(len);
    req.emit(source.token_kind(), consumed);
    Ok(())
}
