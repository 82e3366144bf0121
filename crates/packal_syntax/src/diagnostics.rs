//! Diagnostics for the Packal front end.
//!
//! The front end never prints anything itself. It produces structured [`Diagnostic`] records and hands them to a
//! [`DiagnosticSink`] supplied by the caller:
//! - the CLI uses [`TracingSink`], which forwards every record to `tracing`;
//! - tests use [`Diagnostics`], which simply collects them.
//!
//! Fatal parse failures are [`SyntaxError`] values. They unwind to `Parser::parse` through `?`, get recorded on the
//! sink there, and are returned to the caller.
//!
//! ## Notes
//! - [`Location`] is the *raising call site inside the front end* (captured with `#[track_caller]`), not a position in
//!   the user's input. The input line, when known, travels alongside in `input_line`.

use std::fmt;

use thiserror::Error;

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Source location of the statement that raised a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    /// Capture the location of the caller.
    ///
    /// Every function between the raising statement and this call must be `#[track_caller]` for the location to
    /// point at the raising statement.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.file, self.line)
    }
}

/// A structured diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: Location,
    /// 1-based line in the input being compiled, when the record relates to a token.
    pub input_line: Option<u32>,
}

impl Diagnostic {
    #[track_caller]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            location: Location::caller(),
            input_line: None,
        }
    }

    #[track_caller]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    #[track_caller]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    #[track_caller]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn at_input_line(mut self, line: u32) -> Self {
        self.input_line = Some(line);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.severity, self.location, self.message)?;
        if let Some(line) = self.input_line {
            write!(f, " (input line {})", line)?;
        }
        Ok(())
    }
}

// ============================================================================
// Sinks
// ============================================================================

/// Receiver of diagnostic records.
///
/// Constructed once by the entry point and passed by reference into the lexer and parser.
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

/// In-memory sink that keeps every record in arrival order.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|d| d.severity == severity).count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl DiagnosticSink for Diagnostics {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

/// Sink that forwards every record to `tracing` as a structured event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        let Diagnostic {
            severity,
            message,
            location,
            input_line,
        } = diagnostic;
        match severity {
            Severity::Info => tracing::info!(file = location.file, line = location.line, ?input_line, "{message}"),
            Severity::Warning => tracing::warn!(file = location.file, line = location.line, ?input_line, "{message}"),
            Severity::Error => tracing::error!(file = location.file, line = location.line, ?input_line, "{message}"),
        }
    }
}

// ============================================================================
// Fatal errors
// ============================================================================

/// Classification of a fatal parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Missing keyword, missing punctuation, or a token of the wrong kind.
    Syntax,
    /// Reference to a name that was never declared.
    UnknownIdentifier,
    /// Reference to a declared name of the wrong kind.
    TypeMismatch,
    /// A grammar hook the front end recognizes but does not implement.
    Unsupported,
    /// A numeric literal or bound that cannot be represented.
    InvalidLiteral,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::Syntax => write!(f, "syntax error"),
            SyntaxErrorKind::UnknownIdentifier => write!(f, "unknown identifier"),
            SyntaxErrorKind::TypeMismatch => write!(f, "type mismatch"),
            SyntaxErrorKind::Unsupported => write!(f, "unsupported"),
            SyntaxErrorKind::InvalidLiteral => write!(f, "invalid literal"),
        }
    }
}

/// A fatal parse failure.
///
/// Parsing is fail-fast: the first `SyntaxError` ends the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error, miette::Diagnostic)]
#[error("{message}")]
#[diagnostic(code(packal::parse))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub message: String,
    pub location: Location,
    pub input_line: u32,
    #[help]
    pub help: Option<String>,
}

impl SyntaxError {
    #[track_caller]
    pub fn new(kind: SyntaxErrorKind, message: impl Into<String>, input_line: u32) -> Self {
        Self {
            kind,
            message: message.into(),
            location: Location::caller(),
            input_line,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Convert into an `Error` record that keeps the raising location.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.message.clone(),
            location: self.location,
            input_line: Some(self.input_line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_points_at_caller() {
        let expected_line = line!() + 1;
        let diagnostic = Diagnostic::warning("shadowed");
        assert_eq!(diagnostic.location.line, expected_line);
        assert!(diagnostic.location.file.ends_with("diagnostics.rs"));
    }

    #[test]
    fn test_display_matches_log_format() {
        let diagnostic = Diagnostic {
            severity: Severity::Error,
            message: "Unknown character '\\x01'".to_string(),
            location: Location {
                file: "lexer.rs",
                line: 12,
            },
            input_line: None,
        };
        assert_eq!(diagnostic.to_string(), "ERROR(lexer.rs,12): Unknown character '\\x01'");
        assert_eq!(
            diagnostic.at_input_line(3).to_string(),
            "ERROR(lexer.rs,12): Unknown character '\\x01' (input line 3)"
        );
    }

    #[test]
    fn test_collecting_sink_counts_by_severity() {
        let mut sink = Diagnostics::new();
        sink.record(Diagnostic::info("a"));
        sink.record(Diagnostic::warning("b"));
        sink.record(Diagnostic::warning("c"));
        assert_eq!(sink.count(Severity::Info), 1);
        assert_eq!(sink.count(Severity::Warning), 2);
        assert!(!sink.has_errors());
        assert_eq!(sink.warnings().map(|d| d.message.as_str()).collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn test_syntax_error_round_trips_into_record() {
        let err = SyntaxError::new(SyntaxErrorKind::Syntax, "Expected 'begin' when parsing block", 4);
        let record = err.to_diagnostic();
        assert_eq!(record.severity, Severity::Error);
        assert_eq!(record.location, err.location);
        assert_eq!(record.input_line, Some(4));
        assert_eq!(err.to_string(), "Expected 'begin' when parsing block");
    }
}
