//! Program structure produced by the Packal parser.
//!
//! A [`Program`] owns its [`GlobalDeclarations`] table and its [`Block`] directly.

use std::collections::BTreeMap;
use std::fmt;

/// Identifier (simple string alias for now).
pub type Ident = String;

// ============================================================================
// Program
// ============================================================================

/// A parsed program: `program <name>; <declarations> begin ... end.`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub name: Ident,
    pub declarations: GlobalDeclarations,
    pub block: Block,
}

/// The main `begin ... end` block, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

/// A statement inside the main block.
///
/// Only the builtin IO statements exist; their argument has already been checked against the declaration table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Readln(Ident),
    Writeln(Ident),
}

// ============================================================================
// Declarations
// ============================================================================

/// Declared kind of a global name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Unknown,
    Array,
    Constant,
    Integer,
}

impl DeclarationKind {
    /// Return `true` if `readln`/`writeln` may take a name of this kind.
    pub fn is_io_target(self) -> bool {
        matches!(self, DeclarationKind::Integer | DeclarationKind::Array)
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Unknown => write!(f, "unknown"),
            DeclarationKind::Array => write!(f, "array"),
            DeclarationKind::Constant => write!(f, "constant"),
            DeclarationKind::Integer => write!(f, "integer"),
        }
    }
}

/// Payload of a global declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    Constant(i64),
    Integer,
    Array { start: i64, end: i64 },
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Constant(_) => DeclarationKind::Constant,
            Declaration::Integer => DeclarationKind::Integer,
            Declaration::Array { .. } => DeclarationKind::Array,
        }
    }

    /// Noun used in "hides previous declaration" warnings.
    pub fn label(&self) -> &'static str {
        match self {
            Declaration::Constant(_) => "Constant",
            Declaration::Integer => "Integer variable",
            Declaration::Array { .. } => "Array variable",
        }
    }
}

/// Global declaration table.
///
/// ## Notes
/// - Names are case-sensitive.
/// - The kind map and the payload map always hold the same keys with matching variants: both are written by
///   [`GlobalDeclarations::declare`] and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalDeclarations {
    names: BTreeMap<Ident, DeclarationKind>,
    variables: BTreeMap<Ident, Declaration>,
}

impl GlobalDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name`, replacing any previous declaration (last write wins).
    ///
    /// Returns the replaced declaration, if any.
    pub fn declare(&mut self, name: impl Into<Ident>, declaration: Declaration) -> Option<Declaration> {
        let name = name.into();
        self.names.insert(name.clone(), declaration.kind());
        self.variables.insert(name, declaration)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<DeclarationKind> {
        self.names.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.variables.get(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate declarations sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.variables.iter().map(|(name, decl)| (name.as_str(), decl))
    }
}
