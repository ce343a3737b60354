//! Fractional seconds
//!
//! The digit run after the seconds field may be any length. It is read as a
//! fraction of a second at nanosecond resolution; digits past the ninth round
//! the result half up.

use crate::cursor::Cursor;
use crate::request::{Request, Step};
use crate::token::TokenKind;
use cellfmt_core::{SymbolContext, FRACTION_DIGITS};

/// Nanoseconds for a run of fraction digits (`[1]` is 0.1 s).
///
/// The result can be exactly one second when rounding carries out of the
/// ninth digit (`"9999999995"`).
pub fn fraction_nanos(digits: &[u32]) -> u32 {
    let mut nanos: u32 = 0;
    for i in 0..FRACTION_DIGITS {
        nanos = nanos * 10 + digits.get(i).copied().unwrap_or(0);
    }
    match digits.get(FRACTION_DIGITS) {
        Some(&next) if next >= 5 => nanos + 1,
        _ => nanos,
    }
}

/// Parse a bare digit run (no separator) into nanoseconds.
///
/// Returns `None` for an empty run or any character outside the context's
/// digit range.
pub fn parse_fraction(text: &str, ctx: &dyn SymbolContext) -> Option<u32> {
    let digits = text
        .chars()
        .map(|c| ctx.digit_value(c))
        .collect::<Option<Vec<u32>>>()?;
    if digits.is_empty() {
        return None;
    }
    Some(fraction_nanos(&digits))
}

pub(crate) fn match_fractional_second(req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let ctx = req.symbols;
    let separator = cursor.mark();
    if !cursor.eat(ctx.decimal_separator()) {
        return Request::mismatch(cursor, "expected fractional second separator");
    }
    let separator_text = cursor.since(separator);

    let run = cursor.mark();
    let mut digits = Vec::new();
    while let Some(digit) = cursor.peek().and_then(|c| ctx.digit_value(c)) {
        cursor.bump();
        digits.push(digit);
    }
    if digits.is_empty() {
        return Request::mismatch(cursor, "expected fractional second digits");
    }

    req.temporal.nanos = Some(fraction_nanos(&digits));
    req.emit(TokenKind::DecimalSeparator, separator_text);
    req.emit(TokenKind::FractionalSecond, cursor.since(run));
    Ok(())
}
