//! Character cursor over a single source line.
//!
//! This module provides the `Cursor` struct which keeps the scan position
//! inside one line. Positions are byte offsets that always sit on a UTF-8
//! character boundary, so slicing between two positions is safe.

/// A cursor for traversing one line character by character.
///
/// # Example
///
/// ```
/// use fancy_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
///
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
pub struct Cursor<'a> {
    /// The line being traversed.
    source: &'a str,

    /// Current byte position in the line.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the line.
    ///
    /// A NUL inside the line is returned as itself; use
    /// [`is_at_end`](Self::is_at_end) to tell the two apart.
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }

        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// Returns `'\0'` past the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use fancy_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("é/x");
    /// assert_eq!(cursor.peek_char(1), '/');
    /// assert_eq!(cursor.peek_char(2), 'x');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        if offset == 0 {
            return self.current_char();
        }
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Returns true if the rest of the line starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            return;
        }

        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use fancy_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc123");
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.remaining(), "123");
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Advances just past the next occurrence of `delimiter`.
    ///
    /// Returns true if the delimiter was found. Otherwise the cursor moves
    /// to the end of the line and false is returned.
    pub fn eat_through(&mut self, delimiter: &str) -> bool {
        match self.remaining().find(delimiter) {
            Some(offset) => {
                self.position += offset + delimiter.len();
                true
            },
            None => {
                self.advance_to_end();
                false
            },
        }
    }

    /// Moves the cursor to the end of the line.
    pub fn advance_to_end(&mut self) {
        self.position = self.source.len();
    }

    /// Returns true if `c` occurs after the current character.
    pub fn occurs_later(&self, c: char) -> bool {
        let mut rest = self.remaining().chars();
        rest.next();
        rest.as_str().contains(c)
    }

    /// Returns true if the cursor is at the end of the line.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use fancy_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "var");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the text from the current position to the end of the line.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
