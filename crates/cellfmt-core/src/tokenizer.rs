//! Pattern tokenizer
//!
//! Breaks a format pattern such as `#,##0.00;(#,##0.00)` or
//! `dd/mm/yyyy hh:mm:ss.000` into [`FormatToken`]s. The tokenizer does not
//! know which kind of pattern it is reading; deciding whether a token is
//! legal is the compiler's job.

use crate::error::{Error, Result};
use crate::kind::{DigitPlaceholder, Sign};
use crate::token::{FormatToken, FormatTokenKind};

/// Tokenize a pattern string
///
/// # Example
/// ```rust
/// use cellfmt_core::{tokenize, FormatTokenKind};
///
/// let tokens = tokenize("0.00%").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].kind, FormatTokenKind::Percent);
/// ```
pub fn tokenize(pattern: &str) -> Result<Vec<FormatToken>> {
    if pattern.is_empty() {
        return Err(Error::MalformedPattern {
            offset: 0,
            pattern: String::new(),
            reason: "empty pattern",
        });
    }

    let mut tokenizer = Tokenizer::new(pattern);
    let mut tokens = Vec::new();
    while !tokenizer.is_at_end() {
        let token = tokenizer.scan_token(tokens.last())?;
        tokens.push(token);
    }

    resolve_minutes(&mut tokens);
    Ok(tokens)
}

struct Tokenizer<'a> {
    pattern: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            chars: pattern.chars().collect(),
            pos: 0,
        }
    }

    fn scan_token(&mut self, previous: Option<&FormatToken>) -> Result<FormatToken> {
        let start = self.pos;
        let c = self.chars[self.pos];

        if let Some(placeholder) = DigitPlaceholder::from_char(c) {
            let width = self.take_run(c);
            return Ok(self.token(FormatTokenKind::Digits { placeholder, width }, start));
        }

        match c {
            '.' => {
                let after_seconds = matches!(
                    previous.map(|t| &t.kind),
                    Some(FormatTokenKind::Second { .. })
                );
                self.advance();
                if after_seconds && self.peek_char() == Some('0') {
                    let width = self.take_run('0');
                    return Ok(self.token(FormatTokenKind::FractionalSecond { width }, start));
                }
                Ok(self.token(FormatTokenKind::DecimalPoint, start))
            }
            ',' => self.single(FormatTokenKind::GroupSeparator),
            '$' => self.single(FormatTokenKind::Currency),
            '%' => self.single(FormatTokenKind::Percent),
            '+' => self.single(FormatTokenKind::Sign(Sign::Positive)),
            '-' => self.single(FormatTokenKind::Sign(Sign::Negative)),
            ';' => self.single(FormatTokenKind::Separator),
            '@' => self.single(FormatTokenKind::TextPlaceholder),
            'E' | 'e' if matches!(self.peek_char_at(1), Some('+') | Some('-')) => {
                self.advance();
                self.advance();
                Ok(self.token(FormatTokenKind::Exponent, start))
            }
            ' ' => {
                let width = self.take_run(' ');
                Ok(self.token(FormatTokenKind::Whitespace { width }, start))
            }
            '_' => {
                self.take_escaped("'_' must be followed by a character")?;
                Ok(self.token(FormatTokenKind::Whitespace { width: 1 }, start))
            }
            '*' => {
                let fill = self.take_escaped("'*' must be followed by a character")?;
                Ok(self.token(FormatTokenKind::Fill(fill), start))
            }
            '\\' => {
                let escaped = self.take_escaped("'\\' must be followed by a character")?;
                Ok(self.token(FormatTokenKind::Escape(escaped), start))
            }
            '"' => {
                let content = self.take_delimited('"', "unterminated quoted literal")?;
                Ok(self.token(FormatTokenKind::Quoted(content), start))
            }
            '[' => {
                let content = self.take_delimited(']', "unterminated bracket")?;
                Ok(self.token(FormatTokenKind::Bracket(content), start))
            }
            'A' | 'a' if self.matches_ignore_case("am/pm") => {
                self.pos += 5;
                Ok(self.token(FormatTokenKind::AmPm { short: false }, start))
            }
            'A' | 'a' if self.matches_ignore_case("a/p") => {
                self.pos += 3;
                Ok(self.token(FormatTokenKind::AmPm { short: true }, start))
            }
            'G' | 'g' if self.matches_ignore_case("general") => {
                self.pos += 7;
                Ok(self.token(FormatTokenKind::General, start))
            }
            _ => {
                let lower = c.to_ascii_lowercase();
                let field = match lower {
                    'y' => Some(FormatTokenKind::Year { width: 0 }),
                    'm' => Some(FormatTokenKind::Month { width: 0 }),
                    'd' => Some(FormatTokenKind::Day { width: 0 }),
                    'h' => Some(FormatTokenKind::Hour { width: 0 }),
                    's' => Some(FormatTokenKind::Second { width: 0 }),
                    _ => None,
                };
                match field {
                    Some(kind) => {
                        let width = self.take_run_ignore_case(lower);
                        Ok(self.token(with_width(kind, width), start))
                    }
                    None => self.single(FormatTokenKind::Literal(c)),
                }
            }
        }
    }

    // === Helper methods ===

    fn token(&self, kind: FormatTokenKind, start: usize) -> FormatToken {
        let text: String = self.chars[start..self.pos].iter().collect();
        FormatToken::new(kind, text, start)
    }

    fn single(&mut self, kind: FormatTokenKind) -> Result<FormatToken> {
        let start = self.pos;
        self.advance();
        Ok(self.token(kind, start))
    }

    fn take_run(&mut self, c: char) -> usize {
        let start = self.pos;
        while self.peek_char() == Some(c) {
            self.advance();
        }
        self.pos - start
    }

    fn take_run_ignore_case(&mut self, lower: char) -> usize {
        let start = self.pos;
        while self
            .peek_char()
            .map_or(false, |c| c.to_ascii_lowercase() == lower)
        {
            self.advance();
        }
        self.pos - start
    }

    /// Consume a prefix character and the character following it
    fn take_escaped(&mut self, reason: &'static str) -> Result<char> {
        let start = self.pos;
        self.advance();
        match self.peek_char() {
            Some(c) => {
                self.advance();
                Ok(c)
            }
            None => Err(self.malformed(start, reason)),
        }
    }

    /// Consume an opening delimiter, everything up to `close`, and `close`
    fn take_delimited(&mut self, close: char, reason: &'static str) -> Result<String> {
        let start = self.pos;
        self.advance();
        let mut content = String::new();
        loop {
            match self.peek_char() {
                Some(c) if c == close => {
                    self.advance();
                    return Ok(content);
                }
                Some(c) => {
                    content.push(c);
                    self.advance();
                }
                None => return Err(self.malformed(start, reason)),
            }
        }
    }

    fn matches_ignore_case(&self, word: &str) -> bool {
        let mut offset = 0;
        for expected in word.chars() {
            match self.peek_char_at(offset) {
                Some(c) if c.to_ascii_lowercase() == expected => offset += 1,
                _ => return false,
            }
        }
        true
    }

    fn malformed(&self, offset: usize, reason: &'static str) -> Error {
        Error::MalformedPattern {
            offset,
            pattern: self.pattern.to_string(),
            reason,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

fn with_width(kind: FormatTokenKind, width: usize) -> FormatTokenKind {
    match kind {
        FormatTokenKind::Year { .. } => FormatTokenKind::Year { width },
        FormatTokenKind::Month { .. } => FormatTokenKind::Month { width },
        FormatTokenKind::Day { .. } => FormatTokenKind::Day { width },
        FormatTokenKind::Hour { .. } => FormatTokenKind::Hour { width },
        FormatTokenKind::Second { .. } => FormatTokenKind::Second { width },
        other => other,
    }
}

/// Reinterpret `m`/`mm` as minutes when they follow an hour field or
/// precede a seconds field. Literals between the fields are ignored.
fn resolve_minutes(tokens: &mut [FormatToken]) {
    let fields: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind.is_temporal_field())
        .map(|(i, _)| i)
        .collect();

    for (n, &i) in fields.iter().enumerate() {
        let FormatTokenKind::Month { width } = tokens[i].kind else {
            continue;
        };
        if width > 2 {
            continue;
        }
        let after_hour = n > 0
            && matches!(
                tokens[fields[n - 1]].kind,
                FormatTokenKind::Hour { .. }
            );
        let before_second = fields
            .get(n + 1)
            .map_or(false, |&j| matches!(tokens[j].kind, FormatTokenKind::Second { .. }));
        if after_hour || before_second {
            tokens[i].kind = FormatTokenKind::Minute { width };
        }
    }
}
