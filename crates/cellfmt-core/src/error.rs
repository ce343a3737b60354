//! Error types for cellfmt

use crate::kind::PatternKind;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling a pattern or parsing text against it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token that is not legal for the pattern kind being compiled
    /// (e.g. a currency symbol inside a date pattern).
    ///
    /// `offset` is the character offset of the token within `pattern`.
    #[error("Invalid character '{token}' at position {offset} in pattern \"{pattern}\"")]
    InvalidPatternToken {
        offset: usize,
        pattern: String,
        token: String,
    },

    /// The pattern text could not be tokenized at all
    #[error("Malformed pattern \"{pattern}\" at position {offset}: {reason}")]
    MalformedPattern {
        offset: usize,
        pattern: String,
        reason: &'static str,
    },

    /// No alternative of the pattern matched the input.
    ///
    /// `position` is the byte offset at which the parse was attempted.
    #[error("Text does not match pattern \"{pattern}\" at position {position}")]
    NoMatch { position: usize, pattern: String },

    /// The pattern matched, but the caller required the whole input to be consumed
    #[error("Unexpected text after position {position}: '{remainder}'")]
    TrailingText { position: usize, remainder: String },

    /// A typed pattern produced a value of another kind. Typed patterns fix
    /// their kind at compile time, so this only shows up for a wrapper built
    /// around a pattern compiled for a different kind.
    #[error("Pattern \"{pattern}\" did not produce a {expected} value")]
    ValueKind { pattern: String, expected: PatternKind },
}

impl Error {
    /// Character offset into the pattern for compile-time errors
    pub fn pattern_offset(&self) -> Option<usize> {
        match self {
            Error::InvalidPatternToken { offset, .. } | Error::MalformedPattern { offset, .. } => {
                Some(*offset)
            }
            _ => None,
        }
    }

    /// `true` for errors raised while compiling a pattern, as opposed to parsing text
    pub fn is_compile_error(&self) -> bool {
        self.pattern_offset().is_some()
    }
}
