//! Comment lexing.
//!
//! Comments are insignificant input. The only way a comment shows up in the
//! token stream is as an error when a block comment never closes.

use crate::token::{LexErrorKind, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a line comment (from `//` to end of line).
    ///
    /// The terminating newline is left for the whitespace loop.
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    /// Skips a block comment, honoring nested `/* */` pairs.
    ///
    /// Returns an `UnterminatedComment` error token, positioned at the
    /// opening `/*`, if the input ends first.
    pub(crate) fn skip_block_comment(&mut self) -> Option<Token> {
        self.begin_token();
        self.cursor.advance();
        self.cursor.advance();

        let mut depth = 1u32;
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            let next = self.cursor.peek_char(1);

            if c == '/' && next == '*' {
                self.cursor.advance();
                self.cursor.advance();
                depth += 1;
            } else if c == '*' && next == '/' {
                self.cursor.advance();
                self.cursor.advance();
                depth -= 1;
                if depth == 0 {
                    return None;
                }
            } else {
                self.cursor.advance();
            }
        }

        Some(self.error_token(
            LexErrorKind::UnterminatedComment,
            "unterminated block comment".to_string(),
        ))
    }
}
