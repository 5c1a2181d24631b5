//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, token construction, and the
//! top-level character dispatch.

use std::iter::FusedIterator;

use wavec_util::Span;

use crate::charset::{is_ident_start, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{LexErrorKind, Token, TokenKind};

/// Lexer for the Wave programming language.
///
/// The lexer is a pull-based state machine over an immutable source buffer:
/// every call to [`Lexer::next_token`] skips insignificant input, then scans
/// exactly one token. Lexical errors come back as [`TokenKind::Error`]
/// tokens and scanning continues after them.
///
/// # Example
///
/// ```
/// use wavec_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var y = 1;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Var);
/// assert_eq!(lexer.next_token().lexeme, "y");
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once the iterator has yielded the end-of-input token.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Once the source is exhausted this returns an end-of-input token on
    /// every call.
    pub fn next_token(&mut self) -> Token {
        if let Some(error) = self.skip_whitespace_and_comments() {
            return error;
        }

        self.begin_token();

        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::EndOfInput);
        }

        match self.cursor.current_char() {
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '[' => self.single(TokenKind::LeftBracket),
            ']' => self.single(TokenKind::RightBracket),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            '%' => self.single(TokenKind::Percent),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '"' => self.lex_string(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => self.lex_unexpected(c),
        }
    }

    /// Consumes one character and emits `kind`.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Consumes a character no rule accepts and reports it.
    fn lex_unexpected(&mut self, c: char) -> Token {
        self.cursor.advance();
        self.error_token(
            LexErrorKind::UnexpectedCharacter,
            format!("unexpected character '{}'", c.escape_default()),
        )
    }

    /// Marks the current position as the start of the next token.
    pub(crate) fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the token start to the current position.
    fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a token whose lexeme is the text scanned since `begin_token`.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.token_start_line,
            self.token_span(),
        )
    }

    /// Builds an error token carrying `message` as its lexeme.
    pub(crate) fn error_token(&self, kind: LexErrorKind, message: String) -> Token {
        let span = self.token_span();
        tracing::debug!(
            line = span.line,
            column = span.column,
            error = ?kind,
            "{}",
            message
        );
        Token::new(TokenKind::Error(kind), message, self.token_start_line, span)
    }

    /// Skips whitespace and comments.
    ///
    /// Returns an error token if an unterminated block comment swallowed the
    /// rest of the input.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Option<Token> {
        loop {
            let c = self.cursor.current_char();
            if self.cursor.is_at_end() {
                return None;
            }

            if is_whitespace(c) {
                self.cursor.advance();
            } else if c == '/' && self.cursor.peek_char(1) == '/' {
                self.skip_line_comment();
            } else if c == '/' && self.cursor.peek_char(1) == '*' {
                if let Some(error) = self.skip_block_comment() {
                    return Some(error);
                }
            } else {
                return None;
            }
        }
    }

    /// Returns the current line number (1-based).
    ///
    /// This is the line of the next character to be scanned.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the source text being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

/// Yields every token including exactly one end-of-input token, then `None`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
