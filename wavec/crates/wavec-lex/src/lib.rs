//! wavec-lex - Lexical Analyzer for the Wave Programming Language
//!
//! This crate turns Wave source text into a flat sequence of typed tokens
//! for a parser to consume. It does not build trees or check grammar; the
//! only structure it validates is lexical (strings and block comments must
//! be closed).
//!
//! # Example Usage
//!
//! ```
//! use wavec_lex::{Lexer, TokenKind};
//!
//! let source = "var x = 42;";
//! let mut lexer = Lexer::new(source);
//!
//! // Pull tokens one at a time
//! assert_eq!(lexer.next_token().kind, TokenKind::Var);
//!
//! // Or iterate; the iterator ends after the end-of-input token
//! let kinds: Vec<_> = Lexer::new(source).map(|t| t.kind).collect();
//! assert_eq!(kinds.last(), Some(&TokenKind::EndOfInput));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - The scanner state machine
//! - [`cursor`] - Character cursor for source traversal
//! - [`charset`] - ASCII character classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `fun`, `var`, `while`, `if`, `else`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (the lexeme is kept as written)
//! - **String**: `"hello\n"` (quotes and escapes kept raw; see [`unescape`])
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Other**: `=`, `!`
//!
//! ## Delimiters
//!
//! `(` `)` `{` `}` `[` `]` `:` `;` `,` `.`
//!
//! ## Comments
//!
//! `// line` and nestable `/* block */` comments are skipped.
//!
//! # Errors
//!
//! Lexical errors never stop the scanner. They are returned in-band as
//! [`TokenKind::Error`] tokens whose lexeme is the message, and scanning
//! resumes right after the offending text. Use [`Token::to_diagnostic`] to
//! render one for a user.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charset;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::EscapeError;
pub use lexer::{unescape, Lexer};
pub use token::{keyword_from_ident, LexErrorKind, Token, TokenKind};

/// Scans all of `source`, returning every token up to and including the
/// end-of-input token.
///
/// ```
/// let tokens = wavec_lex::tokenize("x == 1");
/// assert_eq!(tokens.len(), 4);
/// assert!(tokens[3].is_eof());
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
