/// Program header and global declaration parsing.
///
/// ```text
/// Program      := 'program' Ident ';' GlobalDecls Block '.'
/// GlobalDecls  := FunctionDecl? ProcedureDecl? ConstDecls? VarDecls?
/// ConstDecls   := 'const' (Ident (',' Ident)* '=' ['-'] Number ';')+
/// VarDecls     := 'var' (Ident (',' Ident)* ':' VarType)+
/// VarType      := 'integer' ';' | 'array' '[' Int '..' Int ']' 'of' 'integer' ';'
/// ```
impl<R: Read> Parser<'_, R> {
    // ========================================================================
    // Program
    // ========================================================================

    fn program_rule(&mut self) -> ParseResult<()> {
        self.expect_keyword(KeywordId::Program, "program")?;
        self.program.name = self.expect_ident("program")?;
        self.expect_punct(";", "program")?;

        self.global_declarations()?;
        self.block()?;

        self.expect_punct(".", "program")?;
        if !self.current.kind.is_eof() {
            let line = self.current.line;
            self.warn(line, format!("Ignoring input after the final '.', starting at {}", self.current));
        }
        Ok(())
    }

    // ========================================================================
    // Global declarations
    // ========================================================================

    fn global_declarations(&mut self) -> ParseResult<()> {
        self.function_declaration()?;
        self.procedure_declaration()?;
        self.constant_declarations()?;
        self.variable_declarations()
    }

    fn function_declaration(&mut self) -> ParseResult<()> {
        if !self.check_keyword(KeywordId::Function) {
            return Ok(());
        }
        Err(self
            .error(SyntaxErrorKind::Unsupported, "Function declarations are not supported".to_string())
            .with_help("declare globals with 'const' and 'var' and put statements in the main block"))
    }

    fn procedure_declaration(&mut self) -> ParseResult<()> {
        if !self.check_keyword(KeywordId::Procedure) {
            return Ok(());
        }
        Err(self
            .error(SyntaxErrorKind::Unsupported, "Procedure declarations are not supported".to_string())
            .with_help("declare globals with 'const' and 'var' and put statements in the main block"))
    }

    fn constant_declarations(&mut self) -> ParseResult<()> {
        if !self.match_keyword(KeywordId::Const) {
            return Ok(());
        }

        loop {
            let line = self.current.line;
            // A repeated name ends the section; the rest is left to the next rule.
            let Some(names) = self.constant_names()? else {
                return Ok(());
            };
            self.expect_punct("=", "constant")?;
            let value = self.expect_integer("constant")?;
            self.expect_punct(";", "constant")?;

            for name in names {
                self.declare(name, Declaration::Constant(value), line);
            }
            if !self.current.kind.is_ident() {
                return Ok(());
            }
        }
    }

    /// Parse `Ident (',' Ident)*`, or `None` on the first name repeated within the list.
    fn constant_names(&mut self) -> ParseResult<Option<Vec<Ident>>> {
        let mut names = vec![self.expect_ident("constant")?];
        while self.match_punct(",") {
            if self.current.kind.is_ident() && names.contains(&self.current.text) {
                return Ok(None);
            }
            names.push(self.expect_ident("constant")?);
        }
        Ok(Some(names))
    }

    fn variable_declarations(&mut self) -> ParseResult<()> {
        if !self.match_keyword(KeywordId::Var) {
            return Ok(());
        }

        loop {
            let line = self.current.line;
            let names = self.variable_names()?;
            self.expect_punct(":", "variable")?;
            let declaration = self.variable_type()?;

            for name in names {
                self.declare(name, declaration, line);
            }
            if !self.current.kind.is_ident() {
                return Ok(());
            }
        }
    }

    /// Parse `Ident (',' Ident)*`, warning about (and dropping) names repeated within the list.
    fn variable_names(&mut self) -> ParseResult<Vec<Ident>> {
        let mut names = vec![self.expect_ident("variable")?];
        while self.match_punct(",") {
            let line = self.current.line;
            let name = self.expect_ident("variable")?;
            if names.contains(&name) {
                self.warn(line, format!("Variable \"{name}\" hides previous declaration of \"{name}\""));
            } else {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn variable_type(&mut self) -> ParseResult<Declaration> {
        if self.match_keyword(KeywordId::Integer) {
            self.expect_punct(";", "variable type")?;
            return Ok(Declaration::Integer);
        }
        if self.check_keyword(KeywordId::Array) {
            return self.array_type();
        }
        Err(self.unexpected("Expected 'array' or 'integer' when parsing variable type".to_string()))
    }

    fn array_type(&mut self) -> ParseResult<Declaration> {
        self.expect_keyword(KeywordId::Array, "array type")?;
        self.expect_punct("[", "array type")?;
        let start = self.expect_integer("array bounds")?;
        self.expect_punct("..", "array bounds")?;
        let end = self.expect_integer("array bounds")?;
        if start > end {
            return Err(self.error(
                SyntaxErrorKind::InvalidLiteral,
                format!("Array lower bound {start} exceeds upper bound {end}"),
            ));
        }
        self.expect_punct("]", "array type")?;
        self.expect_keyword(KeywordId::Of, "array type")?;
        self.expect_keyword(KeywordId::Integer, "array element type")?;
        self.expect_punct(";", "array type")?;
        Ok(Declaration::Array { start, end })
    }

    /// Record `name` in the table; redeclaring a global warns and replaces it.
    fn declare(&mut self, name: Ident, declaration: Declaration, line: u32) {
        if self.program.declarations.contains(&name) {
            self.warn(
                line,
                format!("{} \"{name}\" hides previous declaration of \"{name}\"", declaration.label()),
            );
        }
        self.program.declarations.declare(name, declaration);
    }
}
