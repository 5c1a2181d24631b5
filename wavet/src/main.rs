//! Wavet CLI - command-line front end for the Wave lexer.
//!
//! This is the main entry point for the wavet CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{Result, WavetError};

/// Wavet - inspect and check Wave source files
///
/// Wavet runs the Wave lexer over source files, either listing the tokens
/// it produces or reporting lexical errors.
#[derive(Parser, Debug)]
#[command(name = "wavet")]
#[command(author = "Wave Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and check Wave source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(
        short,
        long,
        global = true,
        env = "WAVET_VERBOSE",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "WAVET_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(
        long,
        global = true,
        env = "WAVET_NO_COLOR",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the wavet CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of each file
    ///
    /// Prints one entry per token in source order, including error tokens.
    Tokens(TokensCommand),

    /// Report lexical errors
    ///
    /// Prints a diagnostic for every lexical error and exits with a
    /// non-zero status if there was any.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the end-of-input token
    #[arg(long)]
    no_eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print at most this many diagnostics, 0 for all (default: from config)
    #[arg(short, long)]
    max_errors: Option<usize>,
}

/// Main entry point for the wavet CLI.
///
/// Errors are printed to stderr and turned into a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let verbose = cli.verbose || config.verbose;
    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token listings on stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| WavetError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        files: args.files,
        format: args.format.unwrap_or(config.output.format),
        show_eof: config.output.show_eof && !args.no_eof,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        files: args.files,
        max_errors: args.max_errors.unwrap_or(config.check.max_errors),
    };
    run_check(check_args)
}
