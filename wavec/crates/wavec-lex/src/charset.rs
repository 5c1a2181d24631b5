//! Character classes used by the scanner.
//!
//! All classification is ASCII-only. Non-ASCII characters are legal inside
//! strings and comments and nowhere else.

/// Returns true for `[A-Za-z_]`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true for `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true for space, tab, carriage return and newline.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
