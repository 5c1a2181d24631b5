//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. Classification in the
//! lexer is ASCII-only, but the cursor always steps over whole UTF-8
//! characters so every position it reports is a valid `str` boundary.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use wavec_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
///
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character starting `offset` bytes past the current position.
    ///
    /// Offsets are only meaningful across ASCII text, which is all the lexer
    /// ever looks ahead over.
    ///
    /// ```
    /// use wavec_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("==");
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        let Some(&b) = self.source.as_bytes().get(pos) else {
            return '\0';
        };

        // Fast path for ASCII
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Advances the cursor past the current character.
    ///
    /// Consuming a `'\n'` moves to the next line; this is the only place the
    /// line counter changes. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&b) = self.source.as_bytes().get(self.position) else {
            return;
        };

        if b < 128 {
            self.position += 1;
        } else if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }

        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// ```
    /// use wavec_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
