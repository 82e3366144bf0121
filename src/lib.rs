#![forbid(unsafe_code)]
//! Packal front end
//!
//! Packal is a small Pascal-like teaching language. This crate wires the syntax front end (streaming lexer,
//! recursive-descent parser, global declaration table) to a command-line driver.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a front-end bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;

pub use packal_core::lang;
pub use packal_syntax::ast;
pub use packal_syntax::diagnostics;
pub use packal_syntax::lexer;
pub use packal_syntax::parser;
