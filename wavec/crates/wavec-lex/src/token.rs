//! Token definitions for the Wave language.
//!
//! A [`Token`] is a [`TokenKind`] plus the exact text it was scanned from,
//! the line it starts on, and its [`Span`]. Tokens own their lexeme, so
//! they outlive the source buffer they came from.

use std::fmt;

use wavec_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceFile, SourceSnippet, Span};

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword
    Identifier,
    /// Decimal number, optionally with a fractional part: `42`, `3.14`
    Number,
    /// String literal including its quotes: `"hi"`
    String,

    // Keywords
    /// `fun`
    Fun,
    /// `var`
    Var,
    /// `while`
    While,
    /// `if`
    If,
    /// `else`
    Else,

    // Operators
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // Punctuation
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,

    /// End of input. Returned forever once the source is exhausted.
    EndOfInput,
    /// A lexical error; the token's lexeme holds the message.
    Error(LexErrorKind),
}

/// What went wrong when an [`TokenKind::Error`] token was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that matches no scanning rule.
    UnexpectedCharacter,
    /// A string literal still open at end of input.
    UnterminatedString,
    /// A block comment still open at end of input.
    UnterminatedComment,
}

impl LexErrorKind {
    /// Diagnostic code reported for this error.
    pub fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnexpectedCharacter => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        }
    }
}

/// Reserved words, matched by exact, case-sensitive equality.
const KEYWORDS: [(&str, TokenKind); 5] = [
    ("else", TokenKind::Else),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Looks up `ident` in the keyword table.
///
/// ```
/// use wavec_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("fun"), Some(TokenKind::Fun));
/// assert_eq!(keyword_from_ident("funny"), None);
/// assert_eq!(keyword_from_ident("Fun"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(text, _)| *text == ident)
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// Returns true for `fun`, `var`, `while`, `if` and `else`.
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }

    /// Returns true for [`TokenKind::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error(_))
    }

    /// Stable upper-snake name used in token listings.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Fun => "FUN",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Error(_) => "ERROR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token scanned from Wave source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Source text of the token, or the message for error tokens.
    pub lexeme: String,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// Byte range and start column in the source.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Returns true for error tokens.
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    /// Converts an error token into a diagnostic against `file`.
    ///
    /// Returns `None` for every other kind of token.
    pub fn to_diagnostic(&self, file: &SourceFile) -> Option<Diagnostic> {
        let TokenKind::Error(error) = self.kind else {
            return None;
        };

        let start_column = self.span.column as usize;
        let (label, help) = match error {
            LexErrorKind::UnexpectedCharacter => ("not valid here", None),
            LexErrorKind::UnterminatedString => ("string starts here", Some("add a closing `\"`")),
            LexErrorKind::UnterminatedComment => {
                ("comment starts here", Some("close the comment with `*/`"))
            }
        };
        // Underline the offending text, clipped to the line it starts on.
        let width = self
            .span
            .text(file.content())
            .map_or(1, |text| text.lines().next().map_or(0, |l| l.chars().count()).max(1));
        let end_column = start_column + width;

        let mut builder = DiagnosticBuilder::error(self.lexeme.clone())
            .code(error.code())
            .span(self.span);
        if let Ok(text) = file.line_text(self.line) {
            builder = builder.snippet(SourceSnippet::new(
                text,
                self.line as usize,
                start_column,
                end_column,
                Some(label),
            ));
        }
        if error == LexErrorKind::UnterminatedComment {
            builder = builder.note("block comments nest; every `/*` needs its own `*/`");
        }
        if let Some(help) = help {
            builder = builder.help(help);
        }
        Some(builder.build())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '", self.kind)?;
        // Keep one token per line even when a string lexeme spans several.
        for c in self.lexeme.chars() {
            if c.is_control() {
                write!(f, "{}", c.escape_default())?;
            } else {
                write!(f, "{}", c)?;
            }
        }
        write!(f, "' @{}", self.line)
    }
}
