//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites.

use crate::lexer::{Token, TokenKind};
use packal_core::lang::keywords::KeywordId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::Ident)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Return `true` if this token is a punctuation run that begins with `punct`.
    ///
    /// `);` starts with `)`, and so does `)`.
    pub fn starts_with_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punct && self.text.starts_with(punct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punct_prefix_matching() {
        let glued = Token::new(TokenKind::Punct, ");", 1);
        assert!(glued.starts_with_punct(")"));
        assert!(glued.starts_with_punct(");"));
        assert!(!glued.starts_with_punct(";"));

        let word = Token::new(TokenKind::Ident, ")", 1);
        assert!(!word.starts_with_punct(")"));
    }

    #[test]
    fn test_keyword_helpers() {
        let token = Token::new(TokenKind::Keyword(KeywordId::Var), "var", 1);
        assert_eq!(token.keyword_id(), Some(KeywordId::Var));
        assert!(token.kind.is_keyword(KeywordId::Var));
        assert!(!token.kind.is_keyword(KeywordId::Const));
        assert!(!token.kind.is_ident());
    }
}
