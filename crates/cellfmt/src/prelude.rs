//! Prelude module - common imports for cellfmt users
//!
//! ```rust
//! use cellfmt::prelude::*;
//! ```

pub use crate::{
    // Typed patterns
    DatePattern,
    DateTimePattern,
    // Values
    Decimal,
    // Error types
    Error,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    NumberPattern,
    ParseOutcome,
    ParsedValue,
    // Engine
    Pattern,
    PatternKind,
    Result,
    // Locale symbols
    SymbolContext,
    Symbols,
    TimePattern,
    YearWindow,
};
