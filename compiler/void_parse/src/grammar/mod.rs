//! Grammar rules.
//!
//! - `mod.rs`: statements and blocks
//! - `expr.rs`: the Pratt loop plus every prefix and infix handler
//!
//! Every rule is entered with the first token of its construct as the
//! current token and returns with the last token of the construct current.

mod expr;

use tracing::trace;
use void_ir::{BlockStatement, Identifier, Statement, TokenKind};

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        trace!(token = %self.current, "statement");
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let IDENT = EXPR [;]`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.current.literal.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            self.error(ParseError::MissingExpression { construct: "let" });
            return None;
        };
        self.skip_semicolon();
        Some(Statement::Let { name, value })
    }

    /// `return EXPR [;]`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            self.error(ParseError::MissingExpression {
                construct: "return",
            });
            return None;
        };
        self.skip_semicolon();
        Some(Statement::Return(value))
    }

    /// `EXPR [;]`. A lone `;` is an empty statement and produces nothing.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        if self.current_is(TokenKind::Semicolon) {
            return None;
        }
        let expr = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();
        expr.map(Statement::Expression)
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Statements up to, not including, the closing `}`.
    ///
    /// Entered on `{`. Stops when the next token is `}` or end of input and
    /// does not itself report a missing `}`; constructs that own a block
    /// check for the brace afterwards.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        while !self.peek_is(TokenKind::RightBrace) && !self.peek_is(TokenKind::Eof) {
            self.next_token();
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
        }
        BlockStatement::new(statements)
    }

    /// `{ statements }`, entered with `{` as the next token.
    pub(crate) fn parse_braced_block(&mut self) -> Option<BlockStatement> {
        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }
        let block = self.parse_block_statement();
        if !self.expect_peek(TokenKind::RightBrace) {
            return None;
        }
        Some(block)
    }
}
