/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
type ParseResult<T> = Result<T, SyntaxError>;

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and fail-fast: the first [`SyntaxError`] ends the parse, there is no
///   resynchronization.
/// - The program under construction lives inside the parser until `parse()` hands it out.
pub struct Parser<'s, R> {
    lexer: Lexer<R>,
    sink: &'s mut dyn DiagnosticSink,
    current: Token,
    program: Program,
}

impl<'s, R: Read> Parser<'s, R> {
    /// Create a new parser reading from `reader` through a default-sized lexer buffer.
    pub fn new(reader: R, sink: &'s mut dyn DiagnosticSink) -> Self {
        Self::with_lexer(Lexer::new(reader), sink)
    }

    /// Create a new parser over an existing lexer.
    ///
    /// No token is pulled until `parse()` runs.
    pub fn with_lexer(lexer: Lexer<R>, sink: &'s mut dyn DiagnosticSink) -> Self {
        Self {
            lexer,
            sink,
            current: Token::default(),
            program: Program::default(),
        }
    }

    /// Parse the whole input into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first fatal [`SyntaxError`]. It has already been recorded on the sink as an
    /// `Error` diagnostic when this returns; warnings recorded before it stay on the sink.
    pub fn parse(mut self) -> Result<Program, SyntaxError> {
        self.advance();
        match self.program_rule() {
            Ok(()) => Ok(self.program),
            Err(err) => {
                self.sink.record(err.to_diagnostic());
                Err(err)
            }
        }
    }
}
