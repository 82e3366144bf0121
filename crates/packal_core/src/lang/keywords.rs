//! Define the reserved keyword vocabulary for the Packal language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Begin` is an identifier, `begin` is a keyword.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use packal_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("program"), Some(KeywordId::Program));
//! assert_eq!(keywords::from_str("Program"), None);
//! assert_eq!(keywords::as_str(KeywordId::Writeln), "writeln");
//! ```

use std::fmt;

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Program,
    Begin,
    End,

    // Declarations
    Function,
    Procedure,
    Const,
    Var,

    // Types
    Integer,
    Array,
    Of,

    // Builtin statements
    Readln,
    Writeln,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Program structure
    info(KeywordId::Program, "program"),
    info(KeywordId::Begin, "begin"),
    info(KeywordId::End, "end"),
    // Declarations
    info(KeywordId::Function, "function"),
    info(KeywordId::Procedure, "procedure"),
    info(KeywordId::Const, "const"),
    info(KeywordId::Var, "var"),
    // Types
    info(KeywordId::Integer, "integer"),
    info(KeywordId::Array, "array"),
    info(KeywordId::Of, "of"),
    // Builtin statements
    info(KeywordId::Readln, "readln"),
    info(KeywordId::Writeln, "writeln"),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling used in source code.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("INVARIANT: every KeywordId has a KEYWORDS entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a canonical spelling.
/// - `None` otherwise (the lexeme stays an identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

impl fmt::Display for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo { id, canonical }
}
