//! Parser for the Packal programming language
//!
//! Recursive descent over a pulled token stream with one token of lookahead. The parser builds the global
//! declaration table as it goes and checks `readln`/`writeln` arguments against it.
//!
//! ## Examples
//!
//! ```rust
//! use packal_syntax::ast::DeclarationKind;
//! use packal_syntax::diagnostics::Diagnostics;
//! use packal_syntax::parser;
//!
//! let source = "program P; var a : integer; begin readln(a); writeln(a) end.";
//! let mut sink = Diagnostics::new();
//! let program = parser::parse(source.as_bytes(), &mut sink).unwrap();
//! assert_eq!(program.name, "P");
//! assert_eq!(program.declarations.kind_of("a"), Some(DeclarationKind::Integer));
//! ```

use std::io::Read;

use crate::ast::*;
use crate::diagnostics::{Diagnostic, DiagnosticSink, SyntaxError, SyntaxErrorKind};
use crate::lexer::{BufferConfig, Lexer, Token, TokenKind};
use packal_core::lang::keywords::KeywordId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
