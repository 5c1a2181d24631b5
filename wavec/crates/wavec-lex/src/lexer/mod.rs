//! Lexer module.
//!
//! The scanner is one state machine split by token family:
//! - `core` - Lexer struct, token construction and dispatch
//! - `comment` - Line and block comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing and unescaping
//! - `operator` - One- and two-character operators

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
pub use string::unescape;
