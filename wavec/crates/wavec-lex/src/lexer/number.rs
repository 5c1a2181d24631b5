//! Number literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal number literal.
    ///
    /// Accepts a digit run with an optional fractional part. The `.` is
    /// only taken when a digit follows it, so `3.` lexes as `3` then `.`.
    /// The lexeme is kept verbatim; no numeric value is computed.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.consume_digits();

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.consume_digits();
        }

        self.make_token(TokenKind::Number)
    }

    fn consume_digits(&mut self) {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn kinds_and_lexemes(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source).map(|t| (t.kind, t.lexeme)).collect()
    }

    #[test]
    fn test_integer() {
        let mut lexer = Lexer::new("42");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme, "42");
    }

    #[test]
    fn test_fraction() {
        let mut lexer = Lexer::new("3.14");
        assert_eq!(lexer.next_token().lexeme, "3.14");
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        assert_eq!(
            kinds_and_lexemes("3."),
            vec![
                (TokenKind::Number, "3".to_string()),
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::EndOfInput, String::new()),
            ]
        );
    }

    #[test]
    fn test_only_one_fraction() {
        assert_eq!(
            kinds_and_lexemes("1.2.3"),
            vec![
                (TokenKind::Number, "1.2".to_string()),
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::Number, "3".to_string()),
                (TokenKind::EndOfInput, String::new()),
            ]
        );
    }

    #[test]
    fn test_leading_zeros_kept() {
        let mut lexer = Lexer::new("007");
        assert_eq!(lexer.next_token().lexeme, "007");
    }

    #[test]
    fn test_number_then_identifier() {
        let tokens = kinds_and_lexemes("10abc");
        assert_eq!(tokens[0], (TokenKind::Number, "10".to_string()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "abc".to_string()));
    }
}
