//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::diagnostics::{Diagnostic, DiagnosticSink, SyntaxError, TracingSink};
use crate::lexer::Lexer;
use crate::parser;

use super::{CliError, CliResult, ExitCode};

/// Failure to get at a source file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File does not exist: {}", .0.display())]
    Missing(PathBuf),

    #[error("Could not open file: {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Open a source file for streaming.
///
/// The path must name an existing regular file.
pub fn open_source(path: &Path) -> Result<File, SourceError> {
    if !path.is_file() {
        return Err(SourceError::Missing(path.to_path_buf()));
    }
    File::open(path).map_err(|source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Tokenize a file and log every token.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let file = open_source(path)?;
    let mut sink = TracingSink;
    let mut lexer = Lexer::new(file);
    loop {
        let token = lexer.next_token(&mut sink);
        if token.kind.is_eof() {
            break;
        }
        sink.record(Diagnostic::info(format!("Type: {}, Value: {}", token.kind, token.text)).at_input_line(token.line));
    }
    Ok(ExitCode::SUCCESS)
}

/// Target of the events `TracingSink` emits.
const DIAGNOSTICS_TARGET: &str = "packal_syntax::diagnostics";

/// Parse a file.
///
/// Warnings are logged as they happen and never change the exit code. A fatal error reaches stderr exactly once:
/// as the parser's `error` event when that target logs errors, otherwise as a miette report.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn parse_file(path: &Path) -> CliResult<ExitCode> {
    let file = open_source(path)?;
    let mut sink = TracingSink;
    match parser::parse(file, &mut sink) {
        Ok(program) => {
            sink.record(Diagnostic::info(format!(
                "Parsed program '{}': {} global declaration(s), {} statement(s)",
                program.name,
                program.declarations.len(),
                program.block.statements.len()
            )));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(CliError::failure(fatal_message(path, err))),
    }
}

/// Final message for a fatal parse error; empty when the error event was already logged.
fn fatal_message(path: &Path, err: SyntaxError) -> String {
    if tracing::enabled!(target: DIAGNOSTICS_TARGET, tracing::Level::ERROR) {
        if let Some(help) = &err.help {
            tracing::info!("help: {help}");
        }
        return String::new();
    }
    format!("{}: {:?}", path.display(), miette::Report::new(err))
}
