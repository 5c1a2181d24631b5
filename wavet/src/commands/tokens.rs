//! Tokens command implementation.
//!
//! Lists every token scanned from the input files, as text or JSON.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use wavec_lex::{unescape, Token, TokenKind};

use crate::commands::common::{lex_files, LexedFile, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Files to list.
    pub files: Vec<PathBuf>,
    /// Listing format.
    pub format: OutputFormat,
    /// Whether to include the end-of-input token.
    pub show_eof: bool,
}

/// One token as it appears in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl<'a> TokenRecord<'a> {
    fn new(token: &'a Token) -> Self {
        let value = match token.kind {
            TokenKind::String => unescape(&token.lexeme).ok().map(serde_json::Value::String),
            TokenKind::Number => token
                .lexeme
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number),
            _ => None,
        };
        let code = match token.kind {
            TokenKind::Error(error) => Some(error.code().as_str()),
            _ => None,
        };

        Self {
            kind: token.kind.name(),
            lexeme: &token.lexeme,
            line: token.line,
            column: token.span.column,
            value,
            code,
        }
    }
}

/// JSON listing for one file.
#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    file: &'a str,
    tokens: Vec<TokenRecord<'a>>,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    fn visible<'f>(&self, file: &'f LexedFile) -> impl Iterator<Item = &'f Token> {
        let show_eof = self.args.show_eof;
        file.tokens
            .iter()
            .filter(move |token| show_eof || !token.is_eof())
    }

    /// Renders the text listing, with a header per file when there are
    /// several.
    pub fn render_text(&self, files: &[LexedFile]) -> String {
        let mut out = String::new();
        for (i, file) in files.iter().enumerate() {
            if files.len() > 1 {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&format!("==> {} <==\n", file.name()));
            }
            for token in self.visible(file) {
                out.push_str(&token.to_string());
                out.push('\n');
            }
        }
        out
    }

    /// Renders the JSON listing.
    pub fn render_json(&self, files: &[LexedFile]) -> Result<String> {
        let records: Vec<_> = files
            .iter()
            .map(|file| FileRecord {
                file: file.name(),
                tokens: self.visible(file).map(TokenRecord::new).collect(),
            })
            .collect();
        let mut json = serde_json::to_string_pretty(&records)?;
        json.push('\n');
        Ok(json)
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let files = lex_files(&self.args.files)?;
        let rendered = match self.args.format {
            OutputFormat::Text => self.render_text(&files),
            OutputFormat::Json => self.render_json(&files)?,
        };
        out.write_all(rendered.as_bytes())?;

        let errors: usize = files.iter().map(|file| file.errors().count()).sum();
        tracing::info!(files = files.len(), errors, "listed tokens");
        Ok(())
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command, writing to stdout.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    tracing::debug!(command = TokensCommand::name(), files = args.files.len(), "running");
    let command = TokensCommand::new(args);
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    command.execute(&mut lock)
}
