//! Check command implementation.
//!
//! Lexes the input files and reports every lexical error as a diagnostic.
//! The command fails when any error was found.

use std::io::Write;
use std::path::PathBuf;

use wavec_util::Handler;

use crate::commands::common::{lex_files, LexedFile};
use crate::commands::traits::Command;
use crate::error::{Result, WavetError};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Maximum number of diagnostics to print; 0 prints all of them.
    pub max_errors: usize,
}

/// Outcome of checking a batch of files.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Rendered diagnostics, limited by `max_errors`.
    pub rendered: Vec<String>,
    /// Total number of lexical errors.
    pub errors: usize,
    /// Number of files with at least one error.
    pub failed_files: usize,
}

impl CheckReport {
    /// Errors found but not rendered.
    pub fn suppressed(&self) -> usize {
        self.errors - self.rendered.len()
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Collects diagnostics for every error token in `files`.
    pub fn report(&self, files: &[LexedFile]) -> CheckReport {
        let mut report = CheckReport::default();

        for file in files {
            let handler = Handler::new();
            for token in file.errors() {
                if let Some(diagnostic) = token.to_diagnostic(&file.source) {
                    handler.emit_diagnostic(diagnostic);
                }
            }

            tracing::debug!(
                file = %file.path.display(),
                errors = handler.error_count(),
                "checked file"
            );
            if !handler.has_errors() {
                continue;
            }
            report.errors += handler.error_count();
            report.failed_files += 1;

            for diagnostic in handler.diagnostics() {
                if self.args.max_errors != 0 && report.rendered.len() >= self.args.max_errors {
                    break;
                }
                report.rendered.push(diagnostic.render(file.name()));
            }
        }

        report
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Diagnostics go to stderr; `out` only gets the success summary.
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let files = lex_files(&self.args.files)?;
        let report = self.report(&files);

        for diagnostic in &report.rendered {
            eprintln!("{}\n", diagnostic);
        }
        if report.suppressed() > 0 {
            eprintln!("... and {} more error(s)", report.suppressed());
        }

        if report.errors > 0 {
            return Err(WavetError::LexErrors {
                errors: report.errors,
                files: report.failed_files,
            });
        }

        writeln!(out, "checked {} file(s): no lexical errors", files.len())?;
        Ok(())
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command, writing to stdout.
pub fn run_check(args: CheckArgs) -> Result<()> {
    tracing::debug!(command = CheckCommand::name(), files = args.files.len(), "running");
    let command = CheckCommand::new(args);
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    command.execute(&mut lock)
}
