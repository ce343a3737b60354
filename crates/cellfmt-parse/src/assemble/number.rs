//! Number value assembly
//!
//! Digits are collected as ASCII strings while the components run and turned
//! into a [`Decimal`] once the alternative has matched:
//! `value = sign * digits * 10^exponent / 100^percent_count`.

use crate::digit_mode::Segment;
use cellfmt_core::Sign;
use rust_decimal::Decimal;

/// Largest number of significant digits kept before rounding
const MAX_DIGITS: usize = 38;

/// Largest scale a [`Decimal`] can carry
const MAX_SCALE: i64 = 28;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberAccumulator {
    pub sign: Option<Sign>,
    pub integer: String,
    pub fraction: String,
    pub exponent_sign: Option<Sign>,
    pub exponent: String,
    pub percent_count: u32,
}

impl NumberAccumulator {
    pub fn push_digit(&mut self, segment: Segment, digit: u32) {
        let c = char::from_digit(digit, 10).unwrap_or('0');
        match segment {
            Segment::Integer => self.integer.push(c),
            Segment::Fraction => self.fraction.push(c),
            Segment::Exponent => self.exponent.push(c),
        }
    }

    pub fn digit_count(&self, segment: Segment) -> usize {
        match segment {
            Segment::Integer => self.integer.len(),
            Segment::Fraction => self.fraction.len(),
            Segment::Exponent => self.exponent.len(),
        }
    }

    /// `true` once any mantissa digit was read
    pub fn has_mantissa(&self) -> bool {
        !self.integer.is_empty() || !self.fraction.is_empty()
    }

    /// Compute the final value; `None` if nothing was read or the value
    /// does not fit a [`Decimal`]
    pub fn finish(&self) -> Option<Decimal> {
        if !self.has_mantissa() {
            return None;
        }

        let exponent: i64 = if self.exponent.is_empty() {
            0
        } else {
            self.exponent.parse::<i32>().ok()? as i64
        };
        let exponent = match self.exponent_sign {
            Some(Sign::Negative) => -exponent,
            _ => exponent,
        };

        let digits = format!("{}{}", self.integer, self.fraction);
        let scale = self.fraction.len() as i64 - exponent + 2 * self.percent_count as i64;
        let magnitude = scaled(&digits, scale)?;

        if magnitude.is_zero() {
            return Some(Decimal::ZERO);
        }
        Some(match self.sign {
            Some(Sign::Negative) => -magnitude,
            _ => magnitude,
        })
    }
}

/// `digits * 10^-scale`, rounding half up when precision runs out
fn scaled(digits: &str, scale: i64) -> Option<Decimal> {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }

    let mut digits = trimmed.to_string();
    let mut scale = scale;

    let mut drop = digits.len().saturating_sub(MAX_DIGITS) as i64;
    drop = drop.max(scale - MAX_SCALE);
    let mut round_up = false;
    if drop > 0 {
        let drop = drop as usize;
        if drop > digits.len() {
            return Some(Decimal::ZERO);
        }
        let keep = digits.len() - drop;
        round_up = digits.as_bytes()[keep] >= b'5';
        digits.truncate(keep);
        scale -= drop as i64;
    }

    if scale < 0 {
        let zeros = (-scale) as usize;
        if digits.len() + zeros > MAX_DIGITS {
            return None;
        }
        digits.extend(std::iter::repeat('0').take(zeros));
        scale = 0;
    }

    let mut mantissa: i128 = if digits.is_empty() {
        0
    } else {
        digits.parse().ok()?
    };
    if round_up {
        mantissa = mantissa.checked_add(1)?;
    }
    Decimal::try_from_i128_with_scale(mantissa, scale as u32).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn acc(integer: &str, fraction: &str) -> NumberAccumulator {
        NumberAccumulator {
            integer: integer.into(),
            fraction: fraction.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(acc("0", "").finish(), Some(Decimal::ZERO));
        assert_eq!(acc("1234", "").finish(), Some(dec("1234")));
    }

    #[test]
    fn test_fraction() {
        assert_eq!(acc("1", "23").finish(), Some(dec("1.23")));
        assert_eq!(acc("", "5").finish(), Some(dec("0.5")));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(acc("", "").finish(), None);
    }

    #[test]
    fn test_sign_and_negative_zero() {
        let mut a = acc("12", "5");
        a.sign = Some(Sign::Negative);
        assert_eq!(a.finish(), Some(dec("-12.5")));

        let mut zero = acc("0", "00");
        zero.sign = Some(Sign::Negative);
        let value = zero.finish().unwrap();
        assert!(value.is_zero());
        assert!(!value.is_sign_negative());
    }

    #[test]
    fn test_percent() {
        let mut a = acc("123", "");
        a.percent_count = 1;
        assert_eq!(a.finish(), Some(dec("1.23")));
        a.percent_count = 2;
        assert_eq!(a.finish(), Some(dec("0.0123")));
    }

    #[test]
    fn test_exponent() {
        let mut a = acc("1", "5");
        a.exponent = "3".into();
        assert_eq!(a.finish(), Some(dec("1500")));
        a.exponent_sign = Some(Sign::Negative);
        assert_eq!(a.finish(), Some(dec("0.0015")));
    }

    #[test]
    fn test_exponent_overflow() {
        let mut a = acc("1", "");
        a.exponent = "99999999999".into();
        assert_eq!(a.finish(), None);
        a.exponent = "40".into();
        assert_eq!(a.finish(), None);
    }

    #[test]
    fn test_tiny_values_round() {
        let mut a = acc("5", "");
        a.exponent = "29".into();
        a.exponent_sign = Some(Sign::Negative);
        assert_eq!(a.finish(), Some(dec("0.0000000000000000000000000001")));
    }

    #[test]
    fn test_push_digit_by_segment() {
        let mut a = NumberAccumulator::default();
        a.push_digit(Segment::Integer, 4);
        a.push_digit(Segment::Fraction, 2);
        a.push_digit(Segment::Exponent, 1);
        assert_eq!(a.digit_count(Segment::Integer), 1);
        assert_eq!(a.finish(), Some(dec("42")));
    }
}
