//! wavec-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the Wave compiler front end:
//!
//! - [`span`] - Source locations ([`Span`]) and line lookup ([`SourceFile`])
//! - [`diagnostic`] - Error reporting ([`Diagnostic`], [`Handler`], codes, snippets)
//! - [`error`] - Error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use wavec_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! let diag = DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .build();
//! handler.emit_diagnostic(diag);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use error::{SpanError, SpanResult};
pub use span::{SourceFile, Span};
