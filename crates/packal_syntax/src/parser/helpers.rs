/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Pulling tokens (`advance`)
/// - Matching / expecting keywords, punctuation, identifiers, and integer literals
/// - Building fatal errors and recording warnings
///
/// The `expect_*` helpers and the error builders are `#[track_caller]`, so a diagnostic's
/// location is the grammar rule that asked for the token, not this file.
impl<R: Read> Parser<'_, R> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Pull the next token and return the token we just consumed.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token(&mut *self.sink);
        std::mem::replace(&mut self.current, next)
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current.kind.is_keyword(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    #[track_caller]
    fn expect_keyword(&mut self, id: KeywordId, context: &str) -> ParseResult<()> {
        if self.match_keyword(id) {
            Ok(())
        } else {
            Err(self.unexpected(format!("Expected '{}' when parsing {}", id, context)))
        }
    }

    /// Return `true` if the current token is a punctuation run starting with `punct`.
    fn check_punct(&self, punct: &str) -> bool {
        self.current.starts_with_punct(punct)
    }

    /// Consume `punct` from the front of the current punctuation run.
    ///
    /// ## Notes
    /// - The lexer emits maximal punctuation runs, so `readln(a);` yields `);` as one token.
    ///   Matching `)` here leaves `;` as the current token instead of pulling a new one.
    fn match_punct(&mut self, punct: &str) -> bool {
        if !self.check_punct(punct) {
            return false;
        }
        if self.current.text.len() == punct.len() {
            self.advance();
        } else {
            self.current.text.drain(..punct.len());
        }
        true
    }

    #[track_caller]
    fn expect_punct(&mut self, punct: &str, context: &str) -> ParseResult<()> {
        if self.match_punct(punct) {
            Ok(())
        } else {
            Err(self.unexpected(format!("Expected operator '{}' when parsing {}", punct, context)))
        }
    }

    #[track_caller]
    fn expect_ident(&mut self, context: &str) -> ParseResult<Ident> {
        if self.current.kind.is_ident() {
            Ok(self.advance().text)
        } else {
            Err(self.unexpected(format!("Expected identifier when parsing {}", context)))
        }
    }

    /// Parse an optionally negated integer literal.
    #[track_caller]
    fn expect_integer(&mut self, context: &str) -> ParseResult<i64> {
        let negative = self.match_punct("-");
        if self.current.kind != TokenKind::Number {
            return Err(self.unexpected(format!("Expected number when parsing {}", context)));
        }
        let literal = if negative {
            format!("-{}", self.current.text)
        } else {
            self.current.text.clone()
        };
        match literal.parse::<i64>() {
            Ok(value) => {
                self.advance();
                Ok(value)
            }
            Err(_) => Err(self.error(
                SyntaxErrorKind::InvalidLiteral,
                format!("Integer literal {} is out of range when parsing {}", literal, context),
            )),
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// A syntax error that quotes the offending token.
    #[track_caller]
    fn unexpected(&self, expected: String) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::Syntax,
            format!("{}, found {}", expected, self.current),
            self.current.line,
        )
    }

    #[track_caller]
    fn error(&self, kind: SyntaxErrorKind, message: String) -> SyntaxError {
        SyntaxError::new(kind, message, self.current.line)
    }

    #[track_caller]
    fn warn(&mut self, input_line: u32, message: String) {
        self.sink.record(Diagnostic::warning(message).at_input_line(input_line));
    }
}
