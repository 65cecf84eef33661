//! Expression parsing.
//!
//! [`Parser::parse_expression`] runs one prefix handler for the current
//! token, then keeps handing the result to the infix handler of the next
//! token while that token binds tighter than the caller's precedence.
//! Equal precedence stops the loop, which makes every binary operator left
//! associative.

use tracing::trace;
use void_ir::{
    Expression, FunctionLiteral, Identifier, IfExpression, InfixOperator, PrefixOperator,
    TokenKind,
};
use void_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than `precedence`.
    ///
    /// Uses `ensure_sufficient_stack` since nesting depth follows the input.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_fns.get(&self.current.kind).copied() else {
            self.error(ParseError::NoPrefixParseFn {
                literal: self.current.literal.clone(),
            });
            return None;
        };
        trace!(token = %self.current, ?precedence, "prefix");
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some((_, infix)) = self.infix_fns.get(&self.peek.kind).copied() else {
                return Some(left);
            };
            self.next_token();
            trace!(token = %self.current, "infix");
            left = infix(self, left)?;
        }

        Some(left)
    }

    // ─── Prefix handlers ───────────────────────────────────────────────

    #[allow(
        clippy::unnecessary_wraps,
        reason = "signature fixed by the prefix dispatch table"
    )]
    pub(crate) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(
            self.current.literal.clone(),
        )))
    }

    /// Decimal digits; leading zeros are accepted (`00234` is 234).
    pub(crate) fn parse_integer_literal(&mut self) -> Option<Expression> {
        if let Ok(value) = self.current.literal.parse::<i64>() {
            Some(Expression::Integer(value))
        } else {
            self.error(ParseError::InvalidInteger {
                literal: self.current.literal.clone(),
            });
            None
        }
    }

    #[allow(
        clippy::unnecessary_wraps,
        reason = "signature fixed by the prefix dispatch table"
    )]
    pub(crate) fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::Str(self.current.literal.clone()))
    }

    #[allow(
        clippy::unnecessary_wraps,
        reason = "signature fixed by the prefix dispatch table"
    )]
    pub(crate) fn parse_boolean_literal(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.current_is(TokenKind::True)))
    }

    /// `-x`, `!x`
    pub(crate) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = PrefixOperator::from_token(self.current.kind)?;
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix {
            operator,
            operand: Box::new(operand),
        })
    }

    /// `( expr )`
    pub(crate) fn parse_group_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }
        Some(expr)
    }

    /// `[ expr, ... ]`
    pub(crate) fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(TokenKind::RightBracket)?;
        Some(Expression::Array(elements))
    }

    /// `if ( cond ) { ... } [else { ... }]`
    pub(crate) fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }
        self.next_token();

        let Some(condition) = self.parse_expression(Precedence::Lowest) else {
            self.error(ParseError::MissingExpression { construct: "if" });
            return None;
        };
        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        let consequence = self.parse_braced_block()?;
        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            Some(self.parse_braced_block()?)
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// `fn ( ident, ... ) { ... }`
    ///
    /// The id is taken before the body is parsed, so an enclosing literal
    /// always has a smaller id than the literals nested in it.
    pub(crate) fn parse_function_literal(&mut self) -> Option<Expression> {
        let id = self.fresh_function_id();
        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        let body = self.parse_braced_block()?;
        Some(Expression::Function(FunctionLiteral {
            id,
            parameters,
            body,
        }))
    }

    /// Entered on `(`, returns on `)`. A trailing comma is accepted.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        while !self.peek_is(TokenKind::RightParen) && !self.peek_is(TokenKind::Eof) {
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            parameters.push(Identifier::new(self.current.literal.clone()));

            if !self.peek_is(TokenKind::RightParen) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }
        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }
        Some(parameters)
    }

    /// Comma-separated expressions, entered on the opening delimiter and
    /// returning on `close`. A trailing comma is accepted.
    fn parse_expression_list(&mut self, close: TokenKind) -> Option<Vec<Expression>> {
        let mut items = Vec::new();
        while !self.peek_is(close) && !self.peek_is(TokenKind::Eof) {
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);

            if !self.peek_is(close) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }
        if !self.expect_peek(close) {
            return None;
        }
        Some(items)
    }

    // ─── Infix handlers ────────────────────────────────────────────────

    /// `left OP right`; `right` is parsed at the operator's own precedence.
    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = InfixOperator::from_token(self.current.kind)?;
        let precedence = self.current_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// `function ( args )`
    pub(crate) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RightParen)?;
        Some(Expression::Call {
            function: Box::new(function),
            arguments,
        })
    }

    /// `left [ index ]`
    pub(crate) fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.next_token();
        let Some(index) = self.parse_expression(Precedence::Lowest) else {
            self.error(ParseError::MissingExpression {
                construct: "index",
            });
            return None;
        };
        if !self.expect_peek(TokenKind::RightBracket) {
            return None;
        }
        Some(Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }
}
