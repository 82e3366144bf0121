#![forbid(unsafe_code)]
//! Syntax front end for the Packal language: streaming lexer, parser, declaration table, diagnostics.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: beyond the declaration checks the grammar needs (unknown or
//!   mistyped `readln`/`writeln` arguments), it does no semantic analysis and generates no code.
//! - The lexer and parser never print. Everything they have to say goes to a caller-supplied
//!   [`diagnostics::DiagnosticSink`].
//! - Vocabulary identity (keywords) comes from `packal_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use packal_syntax::{diagnostics::Diagnostics, lexer, parser};
//!
//! let mut sink = Diagnostics::new();
//! let tokens = lexer::lex("begin end.".as_bytes(), &mut sink);
//! assert_eq!(tokens.len(), 4); // begin, end, '.', Eof
//!
//! let program = parser::parse("program Hello; begin end.".as_bytes(), &mut sink).unwrap();
//! assert_eq!(program.name, "Hello");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
