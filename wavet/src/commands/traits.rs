//! Command trait for the wavet CLI.

use crate::error::Result;

/// Standard command trait that all wavet commands implement.
///
/// Commands render to a writer instead of printing directly so their output
/// can be checked in tests.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its normal output to `out`.
    fn execute(&self, out: &mut dyn std::io::Write) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;
}
