//! Identifier and keyword lexing.

use crate::charset::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by ASCII
    /// alphanumerics or underscores. The finished lexeme is looked up in
    /// the keyword table; anything not found there is an identifier.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.advance();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
