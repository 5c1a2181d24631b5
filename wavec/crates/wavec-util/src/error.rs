//! Core error types for wavec-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for span and source lookup operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset, smaller than `start`
        end: usize,
    },

    /// Span out of bounds for the source text
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    OutOfBounds {
        /// Length of the source in bytes
        source_len: usize,
        /// Start byte offset of the span
        span_start: usize,
        /// End byte offset of the span
        span_end: usize,
    },

    /// Span does not fall on character boundaries
    #[error("Span {start}..{end} does not fall on character boundaries")]
    NotCharBoundary {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: u32,
        /// Number of lines in the file
        max_lines: usize,
    },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_span_display() {
        let err = SpanError::InvalidSpan { start: 5, end: 2 };
        assert_eq!(err.to_string(), "Invalid span: start 5 > end 2");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = SpanError::OutOfBounds {
            source_len: 3,
            span_start: 1,
            span_end: 9,
        };
        assert_eq!(
            err.to_string(),
            "Span out of bounds: source has 3 bytes, span is 1..9"
        );
    }

    #[test]
    fn test_not_char_boundary_display() {
        let err = SpanError::NotCharBoundary { start: 1, end: 2 };
        assert_eq!(
            err.to_string(),
            "Span 1..2 does not fall on character boundaries"
        );
    }

    #[test]
    fn test_invalid_line_display() {
        let err = SpanError::InvalidLineNumber { line: 7, max_lines: 2 };
        assert_eq!(err.to_string(), "Invalid line number: 7 (file has 2 lines)");
    }
}
