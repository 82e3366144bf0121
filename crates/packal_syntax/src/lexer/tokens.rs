//! Token types for the Packal lexer.
//!
//! ## Notes
//! - Reserved words carry a stable `KeywordId` from `packal_core::lang::keywords`.
//! - Punctuation is not split by the lexer: a maximal run such as `:=` or `);` is one [`TokenKind::Punct`] token. The
//!   parser consumes the run piecewise.

use std::fmt;

use packal_core::lang::keywords::{self, KeywordId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte no lexical class covers (control bytes, non-ASCII).
    #[default]
    Unknown,
    Ident,
    Number,
    /// A maximal run of ASCII punctuation bytes.
    Punct,
    Keyword(KeywordId),
    /// End of input. Returned forever once the source is exhausted.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Unknown => write!(f, "Unknown"),
            TokenKind::Ident => write!(f, "Identifier"),
            TokenKind::Number => write!(f, "Number"),
            TokenKind::Punct => write!(f, "Operator"),
            TokenKind::Keyword(id) => write!(f, "Keyword({})", keywords::as_str(*id)),
            TokenKind::Eof => write!(f, "Eof"),
        }
    }
}

/// A token with its kind, raw lexeme, and starting input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// The end-of-input token.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, String::new(), line)
    }
}

/// Render a token the way diagnostics quote it (`'var'`, `end of input`).
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
