#![forbid(unsafe_code)]
//! Canonical language vocabulary for the Packal compiler front end.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no syntax-tree types.
//! - The lexer and parser live in `packal_syntax`; they consume the registries defined here instead of comparing
//!   spellings ad hoc.

pub mod lang;
