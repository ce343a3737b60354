//! Number components: digit runs, signs, separators and the exponent marker
//!
//! Every function here reads and updates the digit mode carried in the
//! request. Only separators, signs and the exponent marker drive the mode
//! forward; a digit run moves it only past its "no digit yet" state.

use crate::component::DigitSpec;
use crate::cursor::Cursor;
use crate::digit_mode::Segment;
use crate::request::{Request, Step};
use crate::token::TokenKind;
use cellfmt_core::{DigitPlaceholder, Sign, SymbolContext};

fn digit_at(ctx: &dyn SymbolContext, cursor: &Cursor<'_>, offset: usize) -> bool {
    cursor
        .peek_at(offset)
        .and_then(|c| ctx.digit_value(c))
        .is_some()
}

pub(crate) fn match_digits(spec: &DigitSpec, req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let ctx = req.symbols;

    // `?` stands for a digit or a padding space. Integer and exponent runs
    // are padded on the left before their first digit, fraction runs on the
    // right.
    let space = spec.placeholder == DigitPlaceholder::Space;
    let segment = req.mode.segment();
    let fraction = segment == Segment::Fraction;
    let mut padded = 0;
    if space && !fraction && req.number.digit_count(segment) == 0 {
        padded = take_padding(spec.width, req, cursor);
    }

    take_leading_sign(req, cursor);

    let limit = if spec.unbounded {
        usize::MAX
    } else {
        spec.width - padded
    };
    let mut count = 0;
    let mut run = cursor.mark();
    while count < limit {
        let Some(c) = cursor.peek() else {
            break;
        };
        if let Some(digit) = ctx.digit_value(c) {
            cursor.bump();
            req.number.push_digit(req.mode.segment(), digit);
            req.mode = req.mode.after_digit();
            count += 1;
            continue;
        }
        if spec.grouping
            && count > 0
            && c == ctx.group_separator()
            && req.mode.accepts_group()
            && digit_at(ctx, cursor, 1)
        {
            req.emit(TokenKind::Digits, cursor.since(run));
            let group = cursor.mark();
            cursor.bump();
            req.emit(TokenKind::GroupSeparator, cursor.since(group));
            run = cursor.mark();
            continue;
        }
        break;
    }
    req.emit(TokenKind::Digits, cursor.since(run));

    if space && fraction && spec.closes_segment {
        take_padding(spec.width.saturating_sub(count), req, cursor);
    }

    if count == 0 && spec.is_mandatory() && req.number.digit_count(req.mode.segment()) == 0 {
        return Request::mismatch(cursor, "missing mandatory digit");
    }
    Ok(())
}

/// Up to `width` spaces, emitted as one whitespace token
fn take_padding(width: usize, req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> usize {
    let mark = cursor.mark();
    let mut padded = 0;
    while padded < width && cursor.eat(' ') {
        padded += 1;
    }
    req.emit(TokenKind::Whitespace, cursor.since(mark));
    padded
}

/// A sign directly in front of the first digit of the mantissa or exponent
fn take_leading_sign(req: &mut Request<'_>, cursor: &mut Cursor<'_>) {
    if !req.mode.accepts_sign() {
        return;
    }
    let exponent = req.mode.is_exponent();
    let taken = if exponent {
        req.number.exponent_sign.is_some()
    } else {
        req.number.sign.is_some()
    };
    if taken {
        return;
    }

    let ctx = req.symbols;
    let sign = match cursor.peek() {
        Some(c) if c == ctx.negative_sign() => Sign::Negative,
        Some(c) if c == ctx.positive_sign() => Sign::Positive,
        _ => return,
    };
    if !digit_at(ctx, cursor, 1) {
        return;
    }

    let mark = cursor.mark();
    cursor.bump();
    req.emit(TokenKind::Sign(sign), cursor.since(mark));
    if exponent {
        req.number.exponent_sign = Some(sign);
    } else {
        req.number.sign = Some(sign);
    }
    req.mode = req.mode.after_sign();
}

/// An explicit `+` or `-` in the pattern. Before the digits it is a leading
/// sign of the mantissa or exponent; after them a trailing mantissa sign.
pub(crate) fn match_sign(sign: Sign, req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let ctx = req.symbols;
    let expected = match sign {
        Sign::Positive => ctx.positive_sign(),
        Sign::Negative => ctx.negative_sign(),
    };

    let leading = req.mode.accepts_sign();
    let exponent = leading && req.mode.is_exponent();
    if !leading && req.number.sign.is_some() {
        return Request::mismatch(cursor, "sign already read");
    }

    let mark = cursor.mark();
    if !cursor.eat(expected) {
        return Request::mismatch(cursor, "expected sign");
    }
    req.emit(TokenKind::Sign(sign), cursor.since(mark));
    if exponent {
        req.number.exponent_sign = Some(sign);
    } else {
        req.number.sign = Some(sign);
    }
    req.mode = req.mode.after_sign();
    Ok(())
}

pub(crate) fn match_decimal_separator(req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let Some(next) = req.mode.after_decimal_separator() else {
        return Request::mismatch(cursor, "decimal separator not allowed here");
    };
    let mark = cursor.mark();
    if !cursor.eat(req.symbols.decimal_separator()) {
        return Request::mismatch(cursor, "expected decimal separator");
    }
    req.emit(TokenKind::DecimalSeparator, cursor.since(mark));
    req.mode = next;
    Ok(())
}

/// Optional in the integer part; a hard failure anywhere else
pub(crate) fn match_group_separator(req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    if !req.mode.accepts_group() {
        return Request::mismatch(cursor, "group separator outside the integer part");
    }
    let ctx = req.symbols;
    if cursor.peek() == Some(ctx.group_separator()) && digit_at(ctx, cursor, 1) {
        let mark = cursor.mark();
        cursor.bump();
        req.emit(TokenKind::GroupSeparator, cursor.since(mark));
    }
    Ok(())
}

pub(crate) fn match_exponent(req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let Some(next) = req.mode.after_exponent_marker() else {
        return Request::mismatch(cursor, "exponent marker not allowed here");
    };
    let ctx = req.symbols;
    let Some(len) = cursor.match_ignore_case(ctx.exponent_symbol()) else {
        return Request::mismatch(cursor, "expected exponent marker");
    };
    let consumed = cursor.take(len);
    req.emit(TokenKind::Exponent, consumed);
    req.mode = next;
    Ok(())
}

/// `General`: `[sign] digits [decimal digits] [exponent [sign] digits]`
pub(crate) fn match_general(req: &mut Request<'_>, cursor: &mut Cursor<'_>) -> Step {
    let ctx = req.symbols;
    let run = DigitSpec {
        unbounded: true,
        ..DigitSpec::new(DigitPlaceholder::Hash, 1)
    };

    match_digits(&run, req, cursor)?;

    if cursor.peek() == Some(ctx.decimal_separator()) && req.mode.after_decimal_separator().is_some() {
        match_decimal_separator(req, cursor)?;
        match_digits(&run, req, cursor)?;
    }

    if req.number.has_mantissa() && req.mode.after_exponent_marker().is_some() {
        if let Some(len) = cursor.match_ignore_case(ctx.exponent_symbol()) {
            if exponent_digits_follow(ctx, &cursor.remainder()[len..]) {
                match_exponent(req, cursor)?;
                match_digits(&run, req, cursor)?;
            }
        }
    }
    Ok(())
}

fn exponent_digits_follow(ctx: &dyn SymbolContext, rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c == ctx.positive_sign() || c == ctx.negative_sign() => chars
            .next()
            .and_then(|c| ctx.digit_value(c))
            .is_some(),
        Some(c) => ctx.digit_value(c).is_some(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit_mode::DigitMode;
    use crate::token::{concat, Token};
    use cellfmt_core::Symbols;
    use pretty_assertions::assert_eq;

    fn spec(placeholder: DigitPlaceholder, width: usize) -> DigitSpec {
        DigitSpec::new(placeholder, width)
    }

    #[test]
    fn test_bounded_run() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("12345");
        match_digits(&spec(DigitPlaceholder::Hash, 2), &mut req, &mut cursor).unwrap();
        assert_eq!(cursor.remainder(), "345");
        assert_eq!(req.number().integer, "12");
        assert_eq!(req.mode(), DigitMode::Integer);
    }

    #[test]
    fn test_unbounded_run_with_grouping() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("1,234,567.5");
        let lead = DigitSpec {
            unbounded: true,
            grouping: true,
            ..spec(DigitPlaceholder::Hash, 1)
        };
        match_digits(&lead, &mut req, &mut cursor).unwrap();
        assert_eq!(cursor.remainder(), ".5");
        assert_eq!(req.number().integer, "1234567");
        assert_eq!(
            req.tokens(),
            &[
                Token::new(TokenKind::Digits, "1"),
                Token::new(TokenKind::GroupSeparator, ","),
                Token::new(TokenKind::Digits, "234"),
                Token::new(TokenKind::GroupSeparator, ","),
                Token::new(TokenKind::Digits, "567"),
            ]
        );
    }

    #[test]
    fn test_trailing_group_separator_not_consumed() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("12,");
        let lead = DigitSpec {
            unbounded: true,
            grouping: true,
            ..spec(DigitPlaceholder::Hash, 1)
        };
        match_digits(&lead, &mut req, &mut cursor).unwrap();
        assert_eq!(cursor.remainder(), ",");
    }

    #[test]
    fn test_leading_sign() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("-42");
        match_digits(&spec(DigitPlaceholder::Zero, 2), &mut req, &mut cursor).unwrap();
        assert_eq!(req.number().sign, Some(Sign::Negative));
        assert_eq!(concat(req.tokens()), "-42");
    }

    #[test]
    fn test_sign_without_digit_is_left_alone() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("-x");
        match_digits(&spec(DigitPlaceholder::Hash, 1), &mut req, &mut cursor).unwrap();
        assert_eq!(cursor.position(), 0);
        assert_eq!(req.number().sign, None);
    }

    #[test]
    fn test_zero_width() {
        let symbols = Symbols::en_us();
        let mut closing_zero = spec(DigitPlaceholder::Zero, 1);
        closing_zero.closes_segment = true;

        for (placeholder_spec, ok) in [
            (spec(DigitPlaceholder::Hash, 1), true),
            (spec(DigitPlaceholder::Space, 1), true),
            (spec(DigitPlaceholder::Zero, 1), true),
            (closing_zero, false),
        ] {
            let mut req = Request::new(&symbols);
            let mut cursor = Cursor::new("x");
            let step = match_digits(&placeholder_spec, &mut req, &mut cursor);
            assert_eq!(step.is_ok(), ok, "{placeholder_spec:?}");
        }
    }

    #[test]
    fn test_closing_zero_after_earlier_digits() {
        let symbols = Symbols::en_us();
        let mut closing_zero = spec(DigitPlaceholder::Zero, 1);
        closing_zero.closes_segment = true;

        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("12");
        match_digits(&spec(DigitPlaceholder::Hash, 2), &mut req, &mut cursor).unwrap();
        assert!(match_digits(&closing_zero, &mut req, &mut cursor).is_ok());
    }

    #[test]
    fn test_space_placeholder_padding() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("  7");
        match_digits(&spec(DigitPlaceholder::Space, 2), &mut req, &mut cursor).unwrap();
        assert_eq!(cursor.remainder(), "7");
        assert_eq!(req.tokens(), &[Token::new(TokenKind::Whitespace, "  ")]);
        assert_eq!(req.mode(), DigitMode::IntegerOrSign);
    }

    #[test]
    fn test_space_placeholder_partly_padded() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new(" 123");
        let lead = DigitSpec {
            unbounded: true,
            ..spec(DigitPlaceholder::Space, 2)
        };
        match_digits(&lead, &mut req, &mut cursor).unwrap();
        assert!(cursor.is_at_end());
        assert_eq!(req.number().integer, "123");
        assert_eq!(
            req.tokens(),
            &[
                Token::new(TokenKind::Whitespace, " "),
                Token::new(TokenKind::Digits, "123"),
            ]
        );
    }

    #[test]
    fn test_bounded_space_run_counts_padding() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new(" 12");
        match_digits(&spec(DigitPlaceholder::Space, 2), &mut req, &mut cursor).unwrap();
        assert_eq!(cursor.remainder(), "2");
        assert_eq!(req.number().integer, "1");
    }

    #[test]
    fn test_fraction_space_run_pads_on_the_right() {
        let symbols = Symbols::en_us();
        let mut closing = DigitSpec {
            unbounded: true,
            ..spec(DigitPlaceholder::Space, 2)
        };
        closing.closes_segment = true;

        for (input, digits, rest) in [("5 x", "5", "x"), ("  x", "", "x"), ("25 x", "25", " x")] {
            let mut req = Request::new(&symbols);
            req.mode = DigitMode::DecimalFirst;
            let mut cursor = Cursor::new(input);
            match_digits(&closing, &mut req, &mut cursor).unwrap();
            assert_eq!(req.number().fraction, digits, "{input:?}");
            assert_eq!(cursor.remainder(), rest, "{input:?}");
        }
    }

    #[test]
    fn test_non_ascii_digits() {
        let symbols = Symbols::en_us().with_zero_digit('\u{0660}');
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("\u{0661}\u{0662}");
        let lead = DigitSpec {
            unbounded: true,
            ..spec(DigitPlaceholder::Hash, 1)
        };
        match_digits(&lead, &mut req, &mut cursor).unwrap();
        assert_eq!(req.number().integer, "12");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_second_decimal_separator() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("..");
        match_decimal_separator(&mut req, &mut cursor).unwrap();
        assert_eq!(req.mode(), DigitMode::DecimalFirst);
        assert!(match_decimal_separator(&mut req, &mut cursor).is_err());
    }

    #[test]
    fn test_group_separator_after_decimal_fails() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("1");
        assert!(match_group_separator(&mut req, &mut cursor).is_ok());
        req.mode = DigitMode::DecimalNotFirst;
        assert!(match_group_separator(&mut req, &mut cursor).is_err());
    }

    #[test]
    fn test_exponent_marker_and_sign() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        req.mode = DigitMode::Integer;
        let mut cursor = Cursor::new("e-05");
        match_exponent(&mut req, &mut cursor).unwrap();
        assert_eq!(req.mode(), DigitMode::ExponentStart);
        match_digits(&spec(DigitPlaceholder::Zero, 2), &mut req, &mut cursor).unwrap();
        assert_eq!(req.number().exponent_sign, Some(Sign::Negative));
        assert_eq!(req.number().exponent, "05");
        assert_eq!(req.mode(), DigitMode::Exponent);
        assert!(match_exponent(&mut req, &mut cursor).is_err());
    }

    #[test]
    fn test_explicit_trailing_sign() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("5-");
        match_digits(&spec(DigitPlaceholder::Zero, 1), &mut req, &mut cursor).unwrap();
        match_sign(Sign::Negative, &mut req, &mut cursor).unwrap();
        assert_eq!(req.number().sign, Some(Sign::Negative));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_general() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("-1.5E+3 rest");
        match_general(&mut req, &mut cursor).unwrap();
        assert_eq!(cursor.remainder(), " rest");
        assert_eq!(req.number().finish().map(|d| d.to_string()), Some("-1500".into()));
    }

    #[test]
    fn test_general_leaves_dangling_exponent() {
        let symbols = Symbols::en_us();
        let mut req = Request::new(&symbols);
        let mut cursor = Cursor::new("12Ex");
        match_general(&mut req, &mut cursor).unwrap();
        assert_eq!(cursor.remainder(), "Ex");
    }
}
