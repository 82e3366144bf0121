/// Main block and statement parsing.
///
/// ```text
/// Block     := 'begin' [Statement (';' Statement)*] 'end'
/// Statement := 'readln' '(' Ident ')' | 'writeln' '(' Ident ')' | <empty>
/// ```
impl<R: Read> Parser<'_, R> {
    // ========================================================================
    // Block
    // ========================================================================

    fn block(&mut self) -> ParseResult<()> {
        self.expect_keyword(KeywordId::Begin, "block")?;
        loop {
            if let Some(statement) = self.statement()? {
                self.program.block.statements.push(statement);
            }
            if !self.match_punct(";") {
                break;
            }
        }
        self.expect_keyword(KeywordId::End, "block")
    }

    fn statement(&mut self) -> ParseResult<Option<Statement>> {
        match self.current.keyword_id() {
            Some(KeywordId::Readln) => Ok(Some(Statement::Readln(self.io_statement(KeywordId::Readln)?))),
            Some(KeywordId::Writeln) => Ok(Some(Statement::Writeln(self.io_statement(KeywordId::Writeln)?))),
            _ => Ok(None),
        }
    }

    // ========================================================================
    // Builtin IO statements
    // ========================================================================

    /// Parse `builtin '(' Ident ')'` and return the checked argument.
    fn io_statement(&mut self, builtin: KeywordId) -> ParseResult<Ident> {
        let context = builtin.to_string();
        self.expect_keyword(builtin, &context)?;
        self.expect_punct("(", &context)?;
        let argument = self.io_argument(builtin)?;
        self.expect_punct(")", &context)?;
        Ok(argument)
    }

    /// The argument must already be declared as an integer or an array.
    fn io_argument(&mut self, builtin: KeywordId) -> ParseResult<Ident> {
        if !self.current.kind.is_ident() {
            return Err(self.unexpected(format!("Expected identifier when parsing {}", builtin)));
        }
        let name = &self.current.text;
        match self.program.declarations.kind_of(name) {
            None => Err(self.error(
                SyntaxErrorKind::UnknownIdentifier,
                format!("Unknown identifier '{}' when parsing {}", name, builtin),
            )),
            Some(kind) if !kind.is_io_target() => Err(self.error(
                SyntaxErrorKind::TypeMismatch,
                format!("Function {} takes array or integer, but '{}' is a {}", builtin, name, kind),
            )),
            Some(_) => Ok(self.advance().text),
        }
    }
}
