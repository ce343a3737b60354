//! Per-parse mutable state

use crate::assemble::{NumberAccumulator, TemporalFields};
use crate::cursor::Cursor;
use crate::digit_mode::DigitMode;
use crate::token::{Token, TokenKind};
use cellfmt_core::SymbolContext;

/// Why an alternative stopped matching.
///
/// Mismatches are recovered by the trial parser and only show up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Byte offset in the input where the component gave up
    pub position: usize,
    pub reason: &'static str,
}

/// Outcome of matching one component
pub type Step = std::result::Result<(), Mismatch>;

/// State threaded through the components of one alternative attempt.
///
/// A fresh request is created for every alternative and dropped if the
/// alternative fails.
pub struct Request<'c> {
    pub(crate) symbols: &'c dyn SymbolContext,
    pub(crate) mode: DigitMode,
    pub(crate) number: NumberAccumulator,
    pub(crate) temporal: TemporalFields,
    pub(crate) tokens: Vec<Token>,
    /// Index of the component currently being matched
    pub(crate) next: usize,
}

impl<'c> Request<'c> {
    pub fn new(symbols: &'c dyn SymbolContext) -> Self {
        Self {
            symbols,
            mode: DigitMode::default(),
            number: NumberAccumulator::default(),
            temporal: TemporalFields::default(),
            tokens: Vec::new(),
            next: 0,
        }
    }

    pub fn mode(&self) -> DigitMode {
        self.mode
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn number(&self) -> &NumberAccumulator {
        &self.number
    }

    pub fn temporal(&self) -> &TemporalFields {
        &self.temporal
    }

    pub(crate) fn emit(&mut self, kind: TokenKind, text: &str) {
        if !text.is_empty() {
            self.tokens.push(Token::new(kind, text));
        }
    }

    pub(crate) fn mismatch(cursor: &Cursor<'_>, reason: &'static str) -> Step {
        Err(Mismatch {
            position: cursor.position(),
            reason,
        })
    }
}

impl std::fmt::Debug for Request<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("mode", &self.mode)
            .field("number", &self.number)
            .field("temporal", &self.temporal)
            .field("tokens", &self.tokens)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}
