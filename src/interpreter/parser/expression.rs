use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, LogicalOperator, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{MAX_CALL_ENTRIES, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, the comma operator, and recursively descends
    /// through the precedence hierarchy.
    ///
    /// Grammar: `expression := comma`
    ///
    /// # Returns
    /// The parsed expression node.
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expr> {
        self.comma()
    }

    /// Parses a comma expression.
    ///
    /// Grammar: `comma := assignment ( "," assignment )*`
    ///
    /// Each operand is evaluated in turn; the whole expression takes the
    /// value of the last one.
    fn comma(&mut self) -> ParseResult<Expr> {
        let mut expr = self.assignment()?;

        while self.matches(&TokenKind::Comma) {
            let line = self.previous().line;
            let right = self.assignment()?;

            expr = Expr::Binary { left: Box::new(expr),
                                  op: BinaryOperator::Comma,
                                  right: Box::new(right),
                                  line };
        }

        Ok(expr)
    }

    /// Parses an assignment expression.
    ///
    /// Grammar: `assignment := logic_or ( "=" assignment )?`
    ///
    /// The left-hand side is parsed as an ordinary expression first; only
    /// when an `=` follows is it checked for being a valid target. An
    /// invalid target is reported without raising, so parsing continues
    /// from a consistent state.
    pub(in crate::interpreter::parser) fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logic_or()?;

        if self.matches(&TokenKind::Equal) {
            let equals_line = self.previous().line;
            let value = self.assignment()?;

            return match expr {
                Expr::Variable { name, line } => Ok(Expr::Assign { name,
                                                                   value: Box::new(value),
                                                                   line }),
                target => {
                    self.errors.push(SyntaxError::InvalidAssignmentTarget { line: equals_line });

                    Ok(target)
                },
            };
        }

        Ok(expr)
    }

    /// Parses a logical OR expression.
    ///
    /// Grammar: `logic_or := logic_and ( "||" logic_and )*`
    fn logic_or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.logic_and()?;

        while self.matches(&TokenKind::Or) {
            let line = self.previous().line;
            let right = self.logic_and()?;

            expr = Expr::Logical { left: Box::new(expr),
                                   op: LogicalOperator::Or,
                                   right: Box::new(right),
                                   line };
        }

        Ok(expr)
    }

    /// Parses a logical AND expression.
    ///
    /// Grammar: `logic_and := ternary ( "&&" ternary )*`
    fn logic_and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.ternary()?;

        while self.matches(&TokenKind::And) {
            let line = self.previous().line;
            let right = self.ternary()?;

            expr = Expr::Logical { left: Box::new(expr),
                                   op: LogicalOperator::And,
                                   right: Box::new(right),
                                   line };
        }

        Ok(expr)
    }

    /// Parses a ternary conditional expression.
    ///
    /// Grammar: `ternary := equality ( "?" expression ":" ternary )?`
    ///
    /// The operator is right-associative: `a ? b : c ? d : e` groups as
    /// `a ? b : (c ? d : e)`.
    fn ternary(&mut self) -> ParseResult<Expr> {
        let expr = self.equality()?;

        if self.matches(&TokenKind::Question) {
            let line = self.previous().line;
            let then_branch = self.expression()?;

            self.consume(&TokenKind::Colon, "Expect ':' after expression.")?;

            let else_branch = self.ternary()?;

            return Ok(Expr::Ternary { condition: Box::new(expr),
                                      then_branch: Box::new(then_branch),
                                      else_branch: Box::new(else_branch),
                                      line });
        }

        Ok(expr)
    }

    /// Parses an equality expression.
    ///
    /// Grammar: `equality := comparison ( ( "==" | "!=" ) comparison )*`
    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        loop {
            let op = if self.matches(&TokenKind::EqualEqual) {
                BinaryOperator::Equal
            } else if self.matches(&TokenKind::BangEqual) {
                BinaryOperator::NotEqual
            } else {
                break;
            };

            let line = self.previous().line;
            let right = self.comparison()?;

            expr = Expr::Binary { left: Box::new(expr),
                                  op,
                                  right: Box::new(right),
                                  line };
        }

        Ok(expr)
    }

    /// Parses a comparison expression.
    ///
    /// Grammar: `comparison := term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;

        loop {
            let op = if self.matches(&TokenKind::Greater) {
                BinaryOperator::Greater
            } else if self.matches(&TokenKind::GreaterEqual) {
                BinaryOperator::GreaterEqual
            } else if self.matches(&TokenKind::Less) {
                BinaryOperator::Less
            } else if self.matches(&TokenKind::LessEqual) {
                BinaryOperator::LessEqual
            } else {
                break;
            };

            let line = self.previous().line;
            let right = self.term()?;

            expr = Expr::Binary { left: Box::new(expr),
                                  op,
                                  right: Box::new(right),
                                  line };
        }

        Ok(expr)
    }

    /// Parses an additive expression.
    ///
    /// Grammar: `term := factor ( ( "+" | "-" ) factor )*`
    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        loop {
            let op = if self.matches(&TokenKind::Plus) {
                BinaryOperator::Add
            } else if self.matches(&TokenKind::Minus) {
                BinaryOperator::Sub
            } else {
                break;
            };

            let line = self.previous().line;
            let right = self.factor()?;

            expr = Expr::Binary { left: Box::new(expr),
                                  op,
                                  right: Box::new(right),
                                  line };
        }

        Ok(expr)
    }

    /// Parses a multiplicative expression.
    ///
    /// Grammar: `factor := unary ( ( "*" | "/" ) unary )*`
    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        loop {
            let op = if self.matches(&TokenKind::Star) {
                BinaryOperator::Mul
            } else if self.matches(&TokenKind::Slash) {
                BinaryOperator::Div
            } else {
                break;
            };

            let line = self.previous().line;
            let right = self.unary()?;

            expr = Expr::Binary { left: Box::new(expr),
                                  op,
                                  right: Box::new(right),
                                  line };
        }

        Ok(expr)
    }

    /// Parses a unary expression.
    ///
    /// Grammar: `unary := ( "-" | "!" ) unary | call`
    fn unary(&mut self) -> ParseResult<Expr> {
        let op = if self.matches(&TokenKind::Minus) {
            UnaryOperator::Negate
        } else if self.matches(&TokenKind::Bang) {
            UnaryOperator::Not
        } else {
            return self.call();
        };

        let line = self.previous().line;
        let expr = self.unary()?;

        Ok(Expr::Unary { op, expr: Box::new(expr), line })
    }

    /// Parses a call expression.
    ///
    /// Grammar: `call := primary ( "(" arguments? ")" )*`
    ///
    /// Calls chain left to right, so `f(1)(2)` calls the result of `f(1)`.
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        while self.matches(&TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    /// Parses the argument list of a call after the opening `(`.
    ///
    /// Grammar: `arguments := assignment ( "," assignment )*`
    ///
    /// Arguments parse at assignment precedence so a comma separates
    /// arguments instead of forming a comma expression. At most eight
    /// arguments are accepted; each argument beyond the cap is reported
    /// individually, and parsing continues so the rest of the call is
    /// still checked.
    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                if arguments.len() >= MAX_CALL_ENTRIES {
                    let line = self.peek().line;
                    self.errors.push(SyntaxError::TooManyArguments { line });
                }

                arguments.push(self.assignment()?);

                if !self.matches(&TokenKind::Comma) {
                    break;
                }
            }
        }

        let paren = self.consume(&TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call { callee: Box::new(callee),
                        arguments,
                        line: paren.line })
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// `primary := NUMBER | STRING | "true" | "false" | "null" | IDENTIFIER
    ///           | "(" expression ")"`
    ///
    /// # Errors
    /// - `Expected` if the current token cannot begin an expression.
    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::Number(value) => {
                self.advance();

                Ok(Expr::Literal { value: LiteralValue::Number(value),
                                   line: token.line })
            },
            TokenKind::Str(value) => {
                self.advance();

                Ok(Expr::Literal { value: LiteralValue::Str(value),
                                   line: token.line })
            },
            TokenKind::True => {
                self.advance();

                Ok(Expr::Literal { value: LiteralValue::Bool(true),
                                   line: token.line })
            },
            TokenKind::False => {
                self.advance();

                Ok(Expr::Literal { value: LiteralValue::Bool(false),
                                   line: token.line })
            },
            TokenKind::Null => {
                self.advance();

                Ok(Expr::Literal { value: LiteralValue::Null,
                                   line: token.line })
            },
            TokenKind::Identifier(name) => {
                self.advance();

                Ok(Expr::Variable { name, line: token.line })
            },
            TokenKind::LeftParen => {
                self.advance();

                let expr = self.expression()?;
                self.consume(&TokenKind::RightParen, "Expect ')' after expression.")?;

                Ok(Expr::Grouping { expr: Box::new(expr),
                                    line: token.line })
            },
            _ => Err(self.expected("Expect expression.")),
        }
    }
}
