//! String literal lexing.
//!
//! The scanner keeps string lexemes raw: quotes and escape sequences are
//! left exactly as written. [`unescape`] turns such a lexeme into the
//! string value it denotes.

use crate::error::EscapeError;
use crate::token::{LexErrorKind, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// A backslash consumes the character after it, so `\"` does not close
    /// the string. Newlines are allowed and counted. Running out of input
    /// before the closing quote yields an `UnterminatedString` error token
    /// on the line the string began.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return self.error_token(
                    LexErrorKind::UnterminatedString,
                    "unterminated string".to_string(),
                );
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return self.make_token(TokenKind::String);
                },
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                },
                _ => self.cursor.advance(),
            }
        }
    }
}

/// Decodes a raw string lexeme, quotes included, into its value.
///
/// Supported escapes: `\n`, `\t`, `\r`, `\\`, `\"`, `\0`.
///
/// ```
/// use wavec_lex::unescape;
///
/// assert_eq!(unescape(r#""a\tb""#).unwrap(), "a\tb");
/// assert!(unescape(r#""\q""#).is_err());
/// ```
pub fn unescape(lexeme: &str) -> Result<String, EscapeError> {
    let inner = lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(EscapeError::NotQuoted)?;

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }

        let escaped = match chars.next() {
            Some((_, 'n')) => '\n',
            Some((_, 't')) => '\t',
            Some((_, 'r')) => '\r',
            Some((_, '\\')) => '\\',
            Some((_, '"')) => '"',
            Some((_, '0')) => '\0',
            Some((_, ch)) => {
                return Err(EscapeError::UnknownEscape {
                    ch,
                    offset: offset + 1,
                })
            },
            None => return Err(EscapeError::TrailingBackslash { offset: offset + 1 }),
        };
        value.push(escaped);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_string() {
        let mut lexer = Lexer::new("\"hi\" x");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.lexeme, "\"hi\"");
        assert_eq!(lexer.next_token().lexeme, "x");
    }

    #[test]
    fn test_empty_string() {
        let mut lexer = Lexer::new("\"\"");
        assert_eq!(lexer.next_token().lexeme, "\"\"");
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let mut lexer = Lexer::new(r#""say \"hi\"" ;"#);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.lexeme, r#""say \"hi\"""#);
        assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_multiline_string_counts_lines() {
        let mut lexer = Lexer::new("\"a\nb\" c");
        let string = lexer.next_token();
        assert_eq!(string.line, 1);
        assert_eq!(lexer.next_token().line, 2);
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("\"abc");
        let error = lexer.next_token();
        assert_eq!(error.kind, TokenKind::Error(LexErrorKind::UnterminatedString));
        assert_eq!(error.line, 1);
        assert_eq!(error.lexeme, "unterminated string");
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_unterminated_string_reports_start_line() {
        let mut lexer = Lexer::new("x\n\"abc\ndef\n");
        lexer.next_token();
        let error = lexer.next_token();
        assert!(error.is_error());
        assert_eq!(error.line, 2);
        let eof = lexer.next_token();
        assert_eq!(eof.line, 4);
    }

    #[test]
    fn test_backslash_at_end_of_input() {
        let mut lexer = Lexer::new("\"abc\\");
        assert!(lexer.next_token().is_error());
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_non_ascii_inside_string() {
        let mut lexer = Lexer::new("\"héllo\"");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.lexeme, "\"héllo\"");
    }

    #[test]
    fn test_unescape_all_escapes() {
        assert_eq!(
            unescape(r#""\n\t\r\\\"\0""#).unwrap(),
            "\n\t\r\\\"\0"
        );
    }

    #[test]
    fn test_unescape_plain() {
        assert_eq!(unescape("\"plain\"").unwrap(), "plain");
        assert_eq!(unescape("\"\"").unwrap(), "");
    }

    #[test]
    fn test_unescape_unknown_escape() {
        assert_eq!(
            unescape(r#""ab\q""#),
            Err(EscapeError::UnknownEscape { ch: 'q', offset: 3 })
        );
    }

    #[test]
    fn test_unescape_not_quoted() {
        assert_eq!(unescape("abc"), Err(EscapeError::NotQuoted));
        assert_eq!(unescape("\""), Err(EscapeError::NotQuoted));
    }

    #[test]
    fn test_unescape_trailing_backslash() {
        assert_eq!(
            unescape("\"a\\\""),
            Err(EscapeError::TrailingBackslash { offset: 2 })
        );
    }
}
