/// Parse a Packal program from a byte source.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `reader`: Byte source; it is owned (and dropped) by the lexer.
/// - `sink`: Receives warnings, lexical errors, and the fatal error if parsing fails.
///
/// ## Errors
/// Returns the first fatal [`SyntaxError`].
#[tracing::instrument(skip_all)]
pub fn parse<R: Read>(reader: R, sink: &mut dyn DiagnosticSink) -> Result<Program, SyntaxError> {
    Parser::new(reader, sink).parse()
}

/// [`parse`] with a custom lexer buffer configuration.
pub fn parse_with_config<R: Read>(
    reader: R,
    config: BufferConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<Program, SyntaxError> {
    Parser::with_lexer(Lexer::with_config(reader, config), sink).parse()
}
