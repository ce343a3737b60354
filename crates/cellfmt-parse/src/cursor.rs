//! Input cursor with explicit save/restore points

/// Position marker returned by [`Cursor::mark`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// A byte position over an in-memory input string
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text, pos: 0 }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed input
    pub fn remainder(&self) -> &'t str {
        &self.text[self.pos..]
    }

    /// Input consumed since `mark`
    pub fn since(&self, mark: Mark) -> &'t str {
        &self.text[mark.0..self.pos]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.remainder().chars().nth(offset)
    }

    /// Advance past the next character, returning it
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is the next character
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `s` if the input continues with it exactly
    pub fn eat_str(&mut self, s: &str) -> Option<&'t str> {
        if !s.is_empty() && self.remainder().starts_with(s) {
            let start = self.pos;
            self.pos += s.len();
            Some(&self.text[start..self.pos])
        } else {
            None
        }
    }

    /// Byte length of the input prefix equal to `candidate` ignoring case,
    /// without consuming anything
    pub fn match_ignore_case(&self, candidate: &str) -> Option<usize> {
        if candidate.is_empty() {
            return None;
        }
        let mut input = self.remainder().char_indices();
        for expected in candidate.chars() {
            let (_, actual) = input.next()?;
            if !actual.to_lowercase().eq(expected.to_lowercase()) {
                return None;
            }
        }
        Some(input.next().map_or(self.remainder().len(), |(i, _)| i))
    }

    /// Consume `len` bytes (as reported by [`Cursor::match_ignore_case`])
    pub fn take(&mut self, len: usize) -> &'t str {
        let start = self.pos;
        self.pos = (self.pos + len).min(self.text.len());
        &self.text[start..self.pos]
    }
}
