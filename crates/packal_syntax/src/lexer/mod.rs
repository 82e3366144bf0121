//! Streaming lexer for the Packal language.
//!
//! The lexer pulls bytes from any [`std::io::Read`] source through a fixed-size buffer and hands out one token per
//! call to [`Lexer::next_token`]. Classification is byte-wise ASCII:
//! - alphabetic start → maximal alphanumeric run → keyword or identifier
//! - digit start → maximal digit run → number
//! - punctuation start → maximal punctuation run (`:=` and `);` are single tokens)
//! - anything else → an `Error` diagnostic and a [`TokenKind::Unknown`] token; lexing continues
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `buffer` - Refillable input buffer and its configuration

mod buffer;
pub mod tokens;

pub use buffer::{BufferConfig, ConfigError, DEFAULT_CAPACITY, DEFAULT_LOW_WATER};
pub use tokens::{Token, TokenKind, keyword_id};

use std::io::Read;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use buffer::SourceBuffer;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// scan:   [skip whitespace] → first byte class → maximal run → Lexeme
// refine: Lexeme::Word → Keyword | Ident, everything else maps 1:1
// ============================================================================

/// Raw scan result, before keyword refinement.
enum Lexeme {
    Word(String),
    Number(String),
    Punct(String),
    Invalid(u8),
    End,
}

/// Lexer for Packal source bytes.
///
/// ## Notes
/// - Infinite-safe: once the source is exhausted every call returns an `Eof` token.
/// - The byte source is owned by the lexer and dropped with it.
pub struct Lexer<R> {
    source: SourceBuffer<R>,
    /// 1-based line of the next unread byte.
    line: u32,
}

impl<R: Read> Lexer<R> {
    /// Create a lexer with the default 65 KiB buffer.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, BufferConfig::default())
    }

    pub fn with_config(reader: R, config: BufferConfig) -> Self {
        Self {
            source: SourceBuffer::new(reader, config),
            line: 1,
        }
    }

    /// Produce the next token.
    ///
    /// Unrecognized bytes and I/O failures are reported to `sink`; this never fails.
    pub fn next_token(&mut self, sink: &mut dyn DiagnosticSink) -> Token {
        let (lexeme, line) = self.scan(sink);
        refine(lexeme, line)
    }

    // ========================================================================
    // Core byte handling
    // ========================================================================

    /// Make sure bytes are buffered if the source has any left; report read failures.
    fn fill(&mut self, sink: &mut dyn DiagnosticSink) -> bool {
        if let Err(e) = self.source.fetch() {
            sink.record(Diagnostic::error(format!("Failed to read input: {e}")).at_input_line(self.line));
        }
        !self.source.is_drained()
    }

    fn peek(&mut self, sink: &mut dyn DiagnosticSink) -> Option<u8> {
        if self.fill(sink) { self.source.current() } else { None }
    }

    /// Consume a maximal run of bytes matching `pred`, continuing across refills.
    fn take_run(&mut self, sink: &mut dyn DiagnosticSink, pred: fn(u8) -> bool) -> String {
        let mut text = String::new();
        loop {
            let run = self.source.take_while(pred);
            text.extend(run.iter().copied().map(char::from));
            // Stopped on a non-matching byte: the run is complete.
            if !self.source.is_drained() {
                break;
            }
            if !self.fill(sink) {
                break;
            }
        }
        text
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan(&mut self, sink: &mut dyn DiagnosticSink) -> (Lexeme, u32) {
        let first = loop {
            match self.peek(sink) {
                None => return (Lexeme::End, self.line),
                Some(byte) if is_space(byte) => {
                    if byte == b'\n' {
                        self.line += 1;
                    }
                    self.source.bump();
                }
                Some(byte) => break byte,
            }
        };

        let line = self.line;
        let lexeme = if first.is_ascii_alphabetic() {
            Lexeme::Word(self.take_run(sink, |b| b.is_ascii_alphanumeric()))
        } else if first.is_ascii_digit() {
            Lexeme::Number(self.take_run(sink, |b| b.is_ascii_digit()))
        } else if first.is_ascii_punctuation() {
            Lexeme::Punct(self.take_run(sink, |b| b.is_ascii_punctuation()))
        } else {
            sink.record(
                Diagnostic::error(format!("Unknown character '{}'", first.escape_ascii())).at_input_line(line),
            );
            self.source.bump();
            Lexeme::Invalid(first)
        };
        (lexeme, line)
    }
}

/// Map a raw lexeme to a token, reclassifying reserved words.
fn refine(lexeme: Lexeme, line: u32) -> Token {
    match lexeme {
        Lexeme::Word(text) => match keyword_id(&text) {
            Some(id) => Token::new(TokenKind::Keyword(id), text, line),
            None => Token::new(TokenKind::Ident, text, line),
        },
        Lexeme::Number(text) => Token::new(TokenKind::Number, text, line),
        Lexeme::Punct(text) => Token::new(TokenKind::Punct, text, line),
        Lexeme::Invalid(byte) => Token::new(TokenKind::Unknown, byte.escape_ascii().to_string(), line),
        Lexeme::End => Token::eof(line),
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Drain a source into tokens, up to and including the first `Eof` token.
#[tracing::instrument(skip_all)]
pub fn lex<R: Read>(reader: R, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
    lex_with_config(reader, BufferConfig::default(), sink)
}

/// [`lex`] with a custom buffer configuration.
pub fn lex_with_config<R: Read>(reader: R, config: BufferConfig, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
    let mut lexer = Lexer::with_config(reader, config);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token(sink);
        let done = token.kind.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
