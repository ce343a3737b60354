//! Digit-mode state machine for number parsing
//!
//! The mode lives in the [`Request`](crate::request::Request) and decides
//! what digit, sign and separator components may consume next:
//!
//! ```text
//! IntegerOrSign --sign/digit--> Integer --decimal--> DecimalFirst --digit--> DecimalNotFirst
//!      |                          |                        |                      |
//!      +--------------------------+---------exponent-------+----------------------+
//!                                              |
//!                                              v
//!                                       ExponentStart --sign/digit--> Exponent
//! ```

/// Position of the number parse within mantissa and exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigitMode {
    /// Nothing consumed yet; a sign may still appear
    #[default]
    IntegerOrSign,
    /// Integer digits are being read
    Integer,
    /// A decimal separator was read, no fraction digit yet
    DecimalFirst,
    /// At least one fraction digit was read
    DecimalNotFirst,
    /// An exponent marker was read; an exponent sign may appear
    ExponentStart,
    /// Exponent digits are being read
    Exponent,
}

/// Which part of the number a digit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Integer,
    Fraction,
    Exponent,
}

impl DigitMode {
    pub fn segment(self) -> Segment {
        match self {
            DigitMode::IntegerOrSign | DigitMode::Integer => Segment::Integer,
            DigitMode::DecimalFirst | DigitMode::DecimalNotFirst => Segment::Fraction,
            DigitMode::ExponentStart | DigitMode::Exponent => Segment::Exponent,
        }
    }

    /// A sign is still allowed before the digits of this segment
    pub fn accepts_sign(self) -> bool {
        matches!(self, DigitMode::IntegerOrSign | DigitMode::ExponentStart)
    }

    /// Group separators are only legal inside the integer part
    pub fn accepts_group(self) -> bool {
        matches!(self, DigitMode::IntegerOrSign | DigitMode::Integer)
    }

    pub fn is_exponent(self) -> bool {
        self.segment() == Segment::Exponent
    }

    pub fn after_sign(self) -> Self {
        match self {
            DigitMode::IntegerOrSign => DigitMode::Integer,
            DigitMode::ExponentStart => DigitMode::Exponent,
            other => other,
        }
    }

    pub fn after_digit(self) -> Self {
        match self {
            DigitMode::IntegerOrSign => DigitMode::Integer,
            DigitMode::DecimalFirst => DigitMode::DecimalNotFirst,
            DigitMode::ExponentStart => DigitMode::Exponent,
            other => other,
        }
    }

    /// `None` when a decimal separator is not allowed (second separator,
    /// or inside the exponent)
    pub fn after_decimal_separator(self) -> Option<Self> {
        match self.segment() {
            Segment::Integer => Some(DigitMode::DecimalFirst),
            Segment::Fraction | Segment::Exponent => None,
        }
    }

    /// `None` when an exponent marker is not allowed (already in the exponent)
    pub fn after_exponent_marker(self) -> Option<Self> {
        match self.segment() {
            Segment::Integer | Segment::Fraction => Some(DigitMode::ExponentStart),
            Segment::Exponent => None,
        }
    }
}
