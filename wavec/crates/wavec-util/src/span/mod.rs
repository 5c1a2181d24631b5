//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets plus the 1-based line and column of the first byte.
//!
//! # Examples
//!
//! ```
//! use wavec_util::span::Span;
//!
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.text("fun add(x)").unwrap(), "add");
//! ```

mod source_file;

pub use source_file::SourceFile;

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// A `Span` represents a half-open byte range `[start, end)` in source code
/// together with the line and column where it begins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use wavec_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single offset
    ///
    /// # Examples
    ///
    /// ```
    /// use wavec_util::span::Span;
    ///
    /// let point = Span::point(12, 2, 1);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Extract the text covered by this span from `source`.
    ///
    /// Fails if the range is inverted, runs past the end of the source, or
    /// splits a multi-byte character.
    pub fn text<'s>(&self, source: &'s str) -> SpanResult<&'s str> {
        if self.start > self.end {
            return Err(SpanError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SpanError::OutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            });
        }
        source
            .get(self.start..self.end)
            .ok_or(SpanError::NotCharBoundary {
                start: self.start,
                end: self.end,
            })
    }
}
