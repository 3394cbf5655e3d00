use crate::{
    ast::{Expr, FunctionDecl, LiteralValue, Stmt},
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{MAX_CALL_ENTRIES, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a declaration or, failing a match, a statement.
    ///
    /// Grammar: `declaration := function_declaration | let_declaration | statement`
    ///
    /// # Returns
    /// A parsed [`Stmt`] node.
    ///
    /// # Errors
    /// Propagates any error from the matched construct.
    pub(in crate::interpreter::parser) fn parse_declaration(&mut self) -> ParseResult<Stmt> {
        if self.matches(&TokenKind::Function) {
            return self.function_declaration();
        }
        if self.matches(&TokenKind::Let) {
            return self.let_declaration();
        }

        self.statement()
    }

    /// Parses a function declaration after the `function` keyword.
    ///
    /// Grammar: `function_declaration := "function" IDENTIFIER "(" parameters? ")" block`
    ///
    /// At most eight parameters are accepted; each parameter beyond the cap
    /// is reported individually, and parsing continues so the body is still
    /// checked.
    ///
    /// # Errors
    /// - `Expected` if the name, parameter list, or body is malformed.
    fn function_declaration(&mut self) -> ParseResult<Stmt> {
        let (name, line) = self.consume_identifier("Expect function name.")?;

        self.consume(&TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_CALL_ENTRIES {
                    let line = self.peek().line;
                    self.errors.push(SyntaxError::TooManyParameters { line });
                }

                let (param, _) = self.consume_identifier("Expect parameter name.")?;
                params.push(param);

                if !self.matches(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.consume(&TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(&TokenKind::LeftBrace, "Expect '{' before function body.")?;

        let body = self.block()?;

        Ok(Stmt::Function(FunctionDecl { name, params, body, line }))
    }

    /// Parses a variable declaration after the `let` keyword.
    ///
    /// Grammar: `let_declaration := "let" IDENTIFIER ( "=" expression )? ";"`
    ///
    /// The initializer, when present, is parsed at assignment precedence so
    /// that a comma continues the declaration rather than forming a comma
    /// expression.
    ///
    /// # Errors
    /// - `Expected` if the name, initializer, or terminating semicolon is
    ///   malformed.
    fn let_declaration(&mut self) -> ParseResult<Stmt> {
        let (name, line) = self.consume_identifier("Expect variable name.")?;

        let initializer = if self.matches(&TokenKind::Equal) {
            Some(self.assignment()?)
        } else {
            None
        };

        self.consume(&TokenKind::Semicolon, "Expect ';' after variable declaration.")?;

        Ok(Stmt::Let { name, initializer, line })
    }

    /// Parses a single statement.
    ///
    /// Grammar: `statement := if | while | for | print | return | block | expression_statement`
    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.matches(&TokenKind::If) {
            return self.if_statement();
        }
        if self.matches(&TokenKind::While) {
            return self.while_statement();
        }
        if self.matches(&TokenKind::For) {
            return self.for_statement();
        }
        if self.matches(&TokenKind::Print) {
            return self.print_statement();
        }
        if self.matches(&TokenKind::Return) {
            return self.return_statement();
        }
        if self.matches(&TokenKind::LeftBrace) {
            return Ok(Stmt::Block { statements: self.block()? });
        }

        self.expression_statement()
    }

    /// Parses an `if` statement with an optional `else` branch.
    ///
    /// Grammar: `if := "if" "(" expression ")" statement ( "else" statement )?`
    ///
    /// The `else` binds to the nearest unmatched `if`.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(&TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(&TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.matches(&TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If { condition, then_branch, else_branch })
    }

    /// Parses a `while` loop.
    ///
    /// Grammar: `while := "while" "(" expression ")" statement`
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(&TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(&TokenKind::RightParen, "Expect ')' after condition.")?;

        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// Parses a `for` loop and lowers it to a `while` loop.
    ///
    /// Grammar:
    /// `for := "for" "(" ( let_declaration | expression_statement | ";" )
    ///         expression? ";" expression? ")" statement`
    ///
    /// The clauses desugar into existing statement forms: the increment is
    /// appended to the body in a block, a missing condition becomes the
    /// literal `true`, and an initializer wraps the loop in an enclosing
    /// block so its variable scopes to the loop alone.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(&TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.matches(&TokenKind::Semicolon) {
            None
        } else if self.matches(&TokenKind::Let) {
            Some(self.let_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            let line = self.peek().line;
            Expr::Literal { value: LiteralValue::Bool(true), line }
        } else {
            self.expression()?
        };
        self.consume(&TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(&TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block { statements: vec![body, Stmt::Expression { expr: increment }] };
        }

        body = Stmt::While { condition, body: Box::new(body) };

        if let Some(initializer) = initializer {
            body = Stmt::Block { statements: vec![initializer, body] };
        }

        Ok(body)
    }

    /// Parses a `print` statement.
    ///
    /// Grammar: `print := "print" expression ";"`
    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(&TokenKind::Semicolon, "Expect ';' after value.")?;

        Ok(Stmt::Print { expr })
    }

    /// Parses a `return` statement with an optional value.
    ///
    /// Grammar: `return := "return" expression? ";"`
    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let line = self.previous().line;

        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };

        self.consume(&TokenKind::Semicolon, "Expect ';' after return value.")?;

        Ok(Stmt::Return { value, line })
    }

    /// Parses the statements of a block after the opening `{`.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    pub(in crate::interpreter::parser) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(&TokenKind::RightBrace) && !self.at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        self.consume(&TokenKind::RightBrace, "Expect '}' after block.")?;

        Ok(statements)
    }

    /// Parses an expression statement.
    ///
    /// Grammar: `expression_statement := expression ";"`
    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(&TokenKind::Semicolon, "Expect ';' after expression.")?;

        Ok(Stmt::Expression { expr })
    }
}
