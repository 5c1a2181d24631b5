//! Error handling module for the wavet CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the wavet CLI application.
#[derive(Error, Debug)]
pub enum WavetError {
    /// Error when the configuration is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source file cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a configuration file is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The checked sources contain lexical errors.
    #[error("found {errors} lexical error(s) in {files} file(s)")]
    LexErrors {
        /// Total number of error tokens.
        errors: usize,
        /// Number of files with at least one error.
        files: usize,
    },
}

/// Result type alias using WavetError.
pub type Result<T> = std::result::Result<T, WavetError>;
