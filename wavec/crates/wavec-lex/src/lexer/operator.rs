//! Operator lexing.
//!
//! Handles the operators that may be followed by `=`: `=`, `!`, `<` and `>`.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes the current character, then `=` if it follows.
    ///
    /// Emits `extended` when the `=` was consumed and `plain` otherwise.
    fn lex_with_equals(&mut self, extended: TokenKind, plain: TokenKind) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            extended
        } else {
            plain
        };
        self.make_token(kind)
    }

    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.lex_with_equals(TokenKind::EqualEqual, TokenKind::Equal)
    }

    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.lex_with_equals(TokenKind::BangEqual, TokenKind::Bang)
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.lex_with_equals(TokenKind::LessEqual, TokenKind::Less)
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.lex_with_equals(TokenKind::GreaterEqual, TokenKind::Greater)
    }
}
