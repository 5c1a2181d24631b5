//! Source files with precomputed line offsets.
//!
//! [`SourceFile`] pairs a display name with its content and answers
//! "what is the text of line N" for diagnostic snippets.

use std::sync::Arc;

use crate::error::{SpanError, SpanResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use wavec_util::span::SourceFile;
///
/// let file = SourceFile::new("main.wave", "fun main() {\n  var x = 1;\n}");
/// assert_eq!(file.name(), "main.wave");
/// assert_eq!(file.line_text(2).unwrap(), "  var x = 1;");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text of the 1-based `line`, without its line terminator.
    pub fn line_text(&self, line: u32) -> SpanResult<&str> {
        let index = (line as usize)
            .checked_sub(1)
            .filter(|&i| i < self.line_starts.len())
            .ok_or(SpanError::InvalidLineNumber {
                line,
                max_lines: self.line_starts.len(),
            })?;

        let start = self.line_starts[index];
        let end = self
            .line_starts
            .get(index + 1)
            .map_or(self.content.len(), |&next| next - 1);

        let text = &self.content[start..end];
        Ok(text.strip_suffix('\r').unwrap_or(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let file = SourceFile::new("a.wave", "var x = 1;");
        assert_eq!(file.line_text(1), Ok("var x = 1;"));
        assert!(file.line_text(2).is_err());
    }

    #[test]
    fn test_crlf_lines() {
        let file = SourceFile::new("a.wave", "fun\r\nvar\r\n");
        assert_eq!(file.line_text(1), Ok("fun"));
        assert_eq!(file.line_text(2), Ok("var"));
        assert_eq!(file.line_text(3), Ok(""));
    }

    #[test]
    fn test_line_out_of_range() {
        let file = SourceFile::new("a.wave", "x\ny");
        assert_eq!(
            file.line_text(0),
            Err(SpanError::InvalidLineNumber { line: 0, max_lines: 2 })
        );
        assert!(file.line_text(3).is_err());
    }

    #[test]
    fn test_empty_file() {
        let file = SourceFile::new("empty.wave", "");
        assert_eq!(file.content(), "");
        assert_eq!(file.line_text(1), Ok(""));
    }
}
