//! Common types and utilities for wavet commands.
//!
//! Reading and lexing input files is shared by every command, so it lives
//! here together with the output format selector.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use wavec_lex::{tokenize, Token};
use wavec_util::SourceFile;

use crate::error::{Result, WavetError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token listing formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `NAME 'lexeme' @line` entry per line
    #[default]
    Text,
    /// A JSON array with one object per file
    Json,
}

// ============================================================================
// Lexing
// ============================================================================

/// A source file together with every token scanned from it.
#[derive(Debug, Clone)]
pub struct LexedFile {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// The file contents.
    pub source: SourceFile,
    /// All tokens, ending with the end-of-input token.
    pub tokens: Vec<Token>,
}

impl LexedFile {
    /// Lexes `content` as if it had been read from `path`.
    pub fn from_source(path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        let source = SourceFile::new(path.display().to_string(), content);
        let tokens = tokenize(content);
        tracing::debug!(
            file = %path.display(),
            tokens = tokens.len(),
            "lexed file"
        );
        Self {
            path,
            source,
            tokens,
        }
    }

    /// Error tokens in source order.
    pub fn errors(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_error())
    }

    /// Display name used in listings and diagnostics.
    pub fn name(&self) -> &str {
        self.source.name()
    }
}

/// Reads and lexes one file.
///
/// Invalid UTF-8 is replaced with U+FFFD, which the lexer then reports as an
/// unexpected character.
pub fn lex_file(path: &Path) -> Result<LexedFile> {
    let bytes = std::fs::read(path).map_err(|source| WavetError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    if let std::borrow::Cow::Owned(_) = content {
        tracing::warn!(file = %path.display(), "invalid UTF-8 replaced");
    }
    Ok(LexedFile::from_source(path, &content))
}

/// Reads and lexes `paths` in parallel.
///
/// Every file gets its own lexer. Results come back in the order the paths
/// were given; the first unreadable file fails the whole batch.
pub fn lex_files(paths: &[PathBuf]) -> Result<Vec<LexedFile>> {
    paths.par_iter().map(|path| lex_file(path)).collect()
}
