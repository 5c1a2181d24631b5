//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! compiler errors along with their notes and help messages.
//!
//! # Examples
//!
//! ```
//! use wavec_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use wavec_util::Span;
//!
//! let handler = Handler::new();
//! let diag = DiagnosticBuilder::error("unexpected character '$'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(3, 4, 1, 4))
//!     .build();
//! handler.emit_diagnostic(diag);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;

/// An error message with its location and supporting detail
///
/// Every diagnostic the front end produces is an error; the lexer has
/// nothing to warn about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Render the diagnostic the way the command-line tools print it.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavec_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
    /// use wavec_util::Span;
    ///
    /// let diag = DiagnosticBuilder::error("unterminated string")
    ///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
    ///     .span(Span::new(0, 4, 1, 1))
    ///     .build();
    /// assert_eq!(
    ///     diag.render("main.wave"),
    ///     "error[E1002]: unterminated string\n --> main.wave:1:1"
    /// );
    /// ```
    pub fn render(&self, file_name: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("error[{}]: {}", code, self.message),
            None => format!("error: {}", self.message),
        };
        out.push_str(&format!(
            "\n --> {}:{}:{}",
            file_name, self.span.line, self.span.column
        ));
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
