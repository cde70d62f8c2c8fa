//! Backtrackable input cursor.
//!
//! The cursor scans one in-memory input string and supports cheap
//! position snapshots ([`Mark`]) for backtracking. All higher grammars
//! (invocation, selector, JSON values) share one cursor and the same
//! mark/reset contract: a failed sub-parse restores the position it
//! started from.

/// Saved cursor position for backtracking.
///
/// Captures position only; taking one is free, so grammars take them
/// liberally before every speculative parse.
#[derive(Copy, Clone, Debug)]
pub struct Mark(usize);

/// Scanner over one invocation's input text.
#[derive(Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    /// Current byte offset into `source`.
    position: usize,
    /// Health flag; a cursor marked failed refuses all parsing.
    ok: bool,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of the given input.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            ok: true,
        }
    }

    /// Returns false if this cursor was marked non-functional.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Marks the cursor as non-functional.
    ///
    /// Hosts that hand out cursors over external input sources use this
    /// to signal a dead source; the invocation parser reports it as an
    /// internal error instead of parsing garbage.
    pub fn fail(&mut self) {
        self.ok = false;
    }

    /// Takes a position snapshot.
    #[must_use]
    pub fn mark(&self) -> Mark {
        Mark(self.position)
    }

    /// Restores a previously taken snapshot.
    pub fn reset(&mut self, mark: Mark) {
        self.position = mark.0;
    }

    /// Returns the text consumed since the given snapshot.
    #[must_use]
    pub fn since(&self, mark: Mark) -> &'src str {
        &self.source[mark.0..self.position]
    }

    /// Returns true if all input has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the unconsumed remainder of the input.
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Peeks at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes one character.
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    /// Consumes whitespace.
    pub fn skip_spaces(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consumes the literal if the input starts with it.
    pub fn eat_literal(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.position += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes up to the next whitespace (or end of input).
    ///
    /// Returns the consumed text, possibly empty.
    pub fn take_word(&mut self) -> &'src str {
        self.take_while(|c| !c.is_whitespace())
    }

    /// Consumes up to (not including) the first delimiter character.
    pub fn take_until(&mut self, delimiters: &[char]) -> &'src str {
        self.take_while(|c| !delimiters.contains(&c))
    }

    /// Consumes the rest of the input.
    pub fn take_rest(&mut self) -> &'src str {
        let rest = self.rest();
        self.position = self.source.len();
        rest
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'src str {
        let start = self.position;
        while self.peek().is_some_and(&keep) {
            self.advance();
        }
        &self.source[start..self.position]
    }

    /// Consumes an integer literal: optional sign, then digits.
    ///
    /// Stops at the first non-digit; the caller decides whether the
    /// stopping character is an acceptable boundary. Restores the
    /// position and returns `None` if no digits follow.
    pub fn take_int(&mut self) -> Option<i64> {
        let mark = self.mark();
        let _ = self.eat_literal("-") || self.eat_literal("+");
        let digits = self.take_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            self.reset(mark);
            return None;
        }
        // Parse the signed span as a whole so i64::MIN round-trips.
        match self.since(mark).parse::<i64>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.reset(mark);
                None
            }
        }
    }

    /// Consumes a floating-point literal: optional sign, digits with an
    /// optional fractional part (either side of the dot may be empty,
    /// but not both).
    pub fn take_float(&mut self) -> Option<f64> {
        let mark = self.mark();
        let _ = self.eat_literal("-") || self.eat_literal("+");
        let whole = self.take_while(|c| c.is_ascii_digit());
        let frac = if self.eat_literal(".") {
            self.take_while(|c| c.is_ascii_digit())
        } else {
            ""
        };
        if whole.is_empty() && frac.is_empty() {
            self.reset(mark);
            return None;
        }
        match self.since(mark).parse::<f64>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.reset(mark);
                None
            }
        }
    }

    /// Consumes a double-quoted string literal, which may be empty.
    ///
    /// Supports `\"`, `\\`, `\n`, and `\t` escapes. Restores the
    /// position and returns `None` if the input does not start with a
    /// quote or the literal is unterminated.
    pub fn take_quoted(&mut self) -> Option<String> {
        let mark = self.mark();
        if !self.eat_literal("\"") {
            return None;
        }
        let mut text = String::new();
        loop {
            match self.peek() {
                None => {
                    self.reset(mark);
                    return None;
                }
                Some('"') => {
                    self.advance();
                    return Some(text);
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some('"') => text.push('"'),
                        Some('\\') => text.push('\\'),
                        Some('n') => text.push('\n'),
                        Some('t') => text.push('\t'),
                        Some(other) => {
                            text.push('\\');
                            text.push(other);
                        }
                        None => {
                            self.reset(mark);
                            return None;
                        }
                    }
                    self.advance();
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
    }
}
