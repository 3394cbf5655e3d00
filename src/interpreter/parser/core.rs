use std::mem;

use crate::{
    ast::Stmt,
    error::SyntaxError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Maximum number of arguments or parameters a call or declaration may carry.
pub const MAX_CALL_ENTRIES: usize = 8;

/// Parses a token stream into a list of statements.
///
/// This is the entry point for parsing. Declarations are parsed one at a
/// time; when one fails, its error is recorded, the parser synchronizes to
/// the next statement boundary, and parsing continues, so a single pass
/// reports every structural error in the program.
///
/// # Parameters
/// - `tokens`: The scanned token stream, terminated by an end-of-file token.
///
/// # Returns
/// The parsed statements alongside every syntax error encountered. The
/// statement list only reflects the program faithfully when the error list
/// is empty.
#[must_use]
pub fn parse(tokens: &[Token]) -> (Vec<Stmt>, Vec<SyntaxError>) {
    let mut parser = Parser::new(tokens);
    let mut statements = Vec::new();

    while !parser.at_end() {
        if let Some(statement) = parser.declaration() {
            statements.push(statement);
        }
    }

    (statements, parser.errors)
}

/// Recursive-descent parser state.
///
/// Holds the token cursor and the diagnostics collected so far. The grammar
/// itself is split across the `statement` and `expression` modules; this
/// module provides the shared token helpers and panic-mode recovery.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens: &'a [Token],
    pub(in crate::interpreter::parser) current: usize,
    pub(in crate::interpreter::parser) errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    pub(in crate::interpreter::parser) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, current: 0, errors: Vec::new() }
    }

    /// Parses a single declaration, recovering from errors.
    ///
    /// On failure the error is recorded and the parser skips ahead to the
    /// next statement boundary, returning `None` so the caller can continue
    /// with the following declaration.
    pub(in crate::interpreter::parser) fn declaration(&mut self) -> Option<Stmt> {
        match self.parse_declaration() {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.errors.push(error);
                self.synchronize();
                None
            },
        }
    }

    /// Skips tokens until a likely statement boundary.
    ///
    /// After a parse error the cursor may sit in the middle of a malformed
    /// construct. Discarding tokens up to a semicolon or the start of the
    /// next statement keeps one mistake from producing a cascade of
    /// follow-on errors.
    pub(in crate::interpreter::parser) fn synchronize(&mut self) {
        self.advance();

        while !self.at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Function
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {},
            }

            self.advance();
        }
    }

    /// Returns the token at the cursor without consuming it.
    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        // The stream always ends with an end-of-file token, so clamping the
        // cursor to the last token keeps lookahead total.
        let index = self.current.min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Returns the most recently consumed token.
    pub(in crate::interpreter::parser) fn previous(&self) -> &Token {
        let index = self.current.saturating_sub(1).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Consumes the current token and returns it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &Token {
        if !self.at_end() {
            self.current += 1;
        }

        self.previous()
    }

    /// Reports whether the current token has the given kind.
    ///
    /// Kinds that carry a payload (numbers, strings, identifiers) match on
    /// the variant alone, ignoring the payload.
    pub(in crate::interpreter::parser) fn check(&self, kind: &TokenKind) -> bool {
        mem::discriminant(&self.peek().kind) == mem::discriminant(kind)
    }

    /// Consumes the current token if it has the given kind.
    pub(in crate::interpreter::parser) fn matches(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the given kind or fails with `message`.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                 kind: &TokenKind,
                                                 message: &str)
                                                 -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(self.expected(message))
        }
    }

    /// Consumes an identifier token or fails with `message`, returning the
    /// identifier's name.
    pub(in crate::interpreter::parser) fn consume_identifier(&mut self,
                                                             message: &str)
                                                             -> ParseResult<(String, usize)> {
        match &self.peek().kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                let line = self.peek().line;
                self.advance();

                Ok((name, line))
            },
            _ => Err(self.expected(message)),
        }
    }

    /// Builds an `Expected` error pointing at the current token.
    pub(in crate::interpreter::parser) fn expected(&self, message: &str) -> SyntaxError {
        let token = self.peek();
        let found = if token.kind == TokenKind::Eof {
            String::new()
        } else {
            token.lexeme.clone()
        };

        SyntaxError::Expected { message: message.to_string(),
                                found,
                                line: token.line }
    }

    /// Reports whether the cursor has reached the end-of-file token.
    pub(in crate::interpreter::parser) fn at_end(&self) -> bool {
        self.current + 1 >= self.tokens.len() || self.peek().kind == TokenKind::Eof
    }
}
