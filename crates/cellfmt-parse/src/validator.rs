//! Compile-time legality checks for format tokens

use cellfmt_core::{Error, FormatToken, FormatTokenKind, PatternKind, Result};

/// `true` if a token of this kind may appear in a pattern of `kind`
pub fn is_legal(kind: PatternKind, token: &FormatTokenKind) -> bool {
    use FormatTokenKind as T;

    match token {
        T::DecimalPoint
        | T::GroupSeparator
        | T::Sign(_)
        | T::Whitespace { .. }
        | T::Fill(_)
        | T::Escape(_)
        | T::Quoted(_)
        | T::Literal(_)
        | T::Separator => true,

        // Elapsed-time counters like `[h]` exceed a time of day
        T::Bracket(content) => !is_elapsed_time(content),

        T::Digits { .. } | T::Currency | T::Percent | T::Exponent | T::General => {
            kind == PatternKind::Number
        }

        T::TextPlaceholder => false,

        T::Year { .. } | T::Month { .. } | T::Day { .. } => kind.has_date_fields(),

        T::Hour { .. }
        | T::Minute { .. }
        | T::Second { .. }
        | T::FractionalSecond { .. }
        | T::AmPm { .. } => kind.has_time_fields(),
    }
}

fn is_elapsed_time(content: &str) -> bool {
    let mut chars = content.chars().map(|c| c.to_ascii_lowercase());
    match chars.next() {
        Some(first @ ('h' | 'm' | 's')) => chars.all(|c| c == first),
        _ => false,
    }
}

/// Reject the first token that is illegal for `kind`
pub fn validate(pattern: &str, tokens: &[FormatToken], kind: PatternKind) -> Result<()> {
    match tokens.iter().find(|t| !is_legal(kind, &t.kind)) {
        Some(token) => Err(Error::InvalidPatternToken {
            offset: token.offset,
            pattern: pattern.to_string(),
            token: token.text.clone(),
        }),
        None => Ok(()),
    }
}
