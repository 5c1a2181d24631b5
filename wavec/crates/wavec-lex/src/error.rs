//! Error types for string literal decoding.

use thiserror::Error;

/// Failure to decode a string lexeme with [`unescape`](crate::unescape).
///
/// Offsets are byte offsets into the lexeme, counting the opening quote.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EscapeError {
    /// The lexeme is not wrapped in double quotes.
    #[error("string lexeme is not wrapped in double quotes")]
    NotQuoted,

    /// A backslash followed by a character with no escape meaning.
    #[error("unknown escape sequence '\\{ch}' at offset {offset}")]
    UnknownEscape {
        /// The character after the backslash.
        ch: char,
        /// Offset of the backslash.
        offset: usize,
    },

    /// A backslash right before the closing quote.
    #[error("backslash at offset {offset} escapes nothing")]
    TrailingBackslash {
        /// Offset of the backslash.
        offset: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EscapeError::UnknownEscape { ch: 'q', offset: 3 };
        assert_eq!(err.to_string(), "unknown escape sequence '\\q' at offset 3");
        assert_eq!(
            EscapeError::NotQuoted.to_string(),
            "string lexeme is not wrapped in double quotes"
        );
    }
}
