//! The scanner: per-call parse state and the primitives shape rules are written with.
//!
//! A `ParseSession` owns the lower-cased input and a read offset. Every primitive either
//! advances the offset past what it consumed (and, except for `read_balanced_span`, past
//! any whitespace that follows) or fails with a [`WktError`] at the offset where the
//! problem was detected. The offset never moves backward.

use crate::diagnostics::WktError;

/// Mutable state of a single parse call.
#[derive(Debug, Clone)]
pub struct ParseSession {
    text: String,
    offset: usize,
}

impl ParseSession {
    /// Creates a session over the lower-cased `input`, positioned at its start.
    pub fn new(input: &str) -> Self {
        Self {
            text: input.to_lowercase(),
            offset: 0,
        }
    }

    /// The normalized text being scanned.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the next character to be read.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// The character at the offset, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    /// The unread remainder of the text.
    pub fn remaining(&self) -> &str {
        &self.text[self.offset..]
    }

    fn bump(&mut self, ch: char) {
        self.offset += ch.len_utf8();
    }

    /// Consumes characters while `predicate` holds; returns the start offset.
    fn consume_while<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(char) -> bool,
    {
        let start = self.offset;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.bump(ch);
        }
        start
    }

    /// Moves past consecutive whitespace. No-op on non-whitespace or at end of input.
    pub fn skip_whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }

    /// Reads a maximal run of letters, then skips trailing whitespace.
    pub fn read_word(&mut self) -> Result<&str, WktError> {
        let start = self.consume_while(char::is_alphabetic);
        if start == self.offset {
            return Err(WktError::word_expected(start));
        }
        let end = self.offset;
        self.skip_whitespace();
        Ok(&self.text[start..end])
    }

    /// Reads a decimal number, then skips trailing whitespace.
    ///
    /// The scan is greedy over `[0-9.+-e]` and only then validated as a literal, so
    /// `1-2` is one (invalid) run rather than two numbers. An invalid literal is
    /// reported at the end of the run.
    pub fn read_number(&mut self) -> Result<f64, WktError> {
        let start = self.consume_while(is_number_char);
        if start == self.offset {
            return Err(WktError::number_expected(start));
        }
        let literal = &self.text[start..self.offset];
        let value = literal
            .parse::<f64>()
            .map_err(|_| WktError::invalid_number(literal, self.offset))?;
        self.skip_whitespace();
        Ok(value)
    }

    /// Consumes `expected` and the whitespace after it, or fails leaving the offset as is.
    pub fn expect(&mut self, expected: char) -> Result<(), WktError> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.bump(ch);
                self.skip_whitespace();
                Ok(())
            }
            found => Err(WktError::unexpected_char(expected, found, self.offset)),
        }
    }

    /// Like [`expect`](Self::expect) but reports absence instead of failing.
    pub fn consume_if_present(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.bump(ch);
                self.skip_whitespace();
                true
            }
            _ => false,
        }
    }

    /// Captures the text up to the next `,` or `)` at nesting depth zero, or to end
    /// of input. Nested `( ... )` groups are skipped intact. The terminator is not
    /// consumed and trailing whitespace is kept in the returned span.
    ///
    /// Positioned at the `i` of `outer(inner(3, 5))` this returns `inner(3, 5)` and
    /// leaves the offset on the final `)`.
    pub fn read_balanced_span(&mut self) -> Result<&str, WktError> {
        let start = self.offset;
        let mut depth = 0usize;
        while let Some(ch) = self.peek() {
            match ch {
                ',' | ')' if depth == 0 => break,
                ')' => depth -= 1,
                '(' => depth += 1,
                _ => {}
            }
            self.bump(ch);
        }
        if depth != 0 {
            return Err(WktError::unbalanced_parenthesis(start));
        }
        Ok(&self.text[start..self.offset])
    }
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e')
}
