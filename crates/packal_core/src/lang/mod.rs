//! Packal language vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`) and look up spellings/metadata via registry tables, which keeps
//! spelling checks out of the lexer and parser.
//!
//! ## Examples
//! ```rust
//! use packal_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("begin"), Some(KeywordId::Begin));
//! assert_eq!(keywords::as_str(KeywordId::Begin), "begin");
//! ```

pub mod keywords;
