//! Pratt parser for Void.
//!
//! Statements are parsed by recursive descent; expressions by precedence
//! climbing over two dispatch tables keyed by token kind:
//! - prefix handlers start an expression (literals, names, unary operators,
//!   groups, `if`, `fn`, arrays)
//! - infix handlers extend an already parsed left operand (binary operators,
//!   calls, indexing), each tagged with its [`Precedence`]
//!
//! Both tables are filled once in [`Parser::new`].
//!
//! # Error Recovery
//!
//! The parser never aborts. A failed construct records a [`ParseError`] and
//! is dropped from the tree; parsing resumes at the next token. Callers must
//! check [`Parser::errors`] before trusting the returned [`Program`].

mod error;
mod grammar;
mod precedence;

pub use error::ParseError;
pub use precedence::Precedence;

use rustc_hash::FxHashMap;
use tracing::debug;
use void_ir::{Expression, FunctionId, Program, Token, TokenKind};
use void_lexer::Lexer;

/// Starts an expression at the current token.
type PrefixParseFn<'src> = fn(&mut Parser<'src>) -> Option<Expression>;

/// Extends `left`; the current token is the operator.
type InfixParseFn<'src> = fn(&mut Parser<'src>, Expression) -> Option<Expression>;

/// Parser state: a two-token window over the lexer plus the dispatch tables.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
    prefix_fns: FxHashMap<TokenKind, PrefixParseFn<'src>>,
    infix_fns: FxHashMap<TokenKind, (Precedence, InfixParseFn<'src>)>,
    next_function_id: u32,
}

impl<'src> Parser<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
            prefix_fns: FxHashMap::default(),
            infix_fns: FxHashMap::default(),
            next_function_id: 0,
        };

        parser.register_prefix(TokenKind::Ident, Self::parse_identifier);
        parser.register_prefix(TokenKind::Int, Self::parse_integer_literal);
        parser.register_prefix(TokenKind::Str, Self::parse_string_literal);
        parser.register_prefix(TokenKind::True, Self::parse_boolean_literal);
        parser.register_prefix(TokenKind::False, Self::parse_boolean_literal);
        parser.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::LeftParen, Self::parse_group_expression);
        parser.register_prefix(TokenKind::LeftBracket, Self::parse_array_literal);
        parser.register_prefix(TokenKind::If, Self::parse_if_expression);
        parser.register_prefix(TokenKind::Function, Self::parse_function_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
        ] {
            parser.register_infix(kind, Self::parse_infix_expression);
        }
        parser.register_infix(TokenKind::LeftParen, Self::parse_call_expression);
        parser.register_infix(TokenKind::LeftBracket, Self::parse_index_expression);

        parser
    }

    fn register_prefix(&mut self, kind: TokenKind, handler: PrefixParseFn<'src>) {
        self.prefix_fns.insert(kind, handler);
    }

    fn register_infix(&mut self, kind: TokenKind, handler: InfixParseFn<'src>) {
        let precedence = Precedence::of_infix(kind).unwrap_or(Precedence::Lowest);
        self.infix_fns.insert(kind, (precedence, handler));
    }

    /// Parse the whole token stream.
    ///
    /// Always returns a program; failed statements are omitted from it and
    /// reported through [`errors`](Self::errors).
    pub fn parse(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }
        Program::new(statements)
    }

    /// Error messages in the order they were found.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    // Token window

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    #[inline]
    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if the next token is `kind`; otherwise record an error and stay.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.error(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek.kind,
                literal: self.peek.literal.clone(),
            });
            false
        }
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.infix_fns
            .get(&kind)
            .map_or(Precedence::Lowest, |(precedence, _)| *precedence)
    }

    #[inline]
    fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek.kind)
    }

    #[inline]
    fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current.kind)
    }

    fn fresh_function_id(&mut self) -> FunctionId {
        let id = FunctionId::new(self.next_function_id);
        self.next_function_id += 1;
        id
    }

    fn error(&mut self, error: ParseError) {
        debug!(%error, "parse error");
        self.errors.push(error);
    }
}

/// Result of parsing a source unit.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages joined with `; `, or `None` when parsing succeeded.
    pub fn error_summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        Some(messages.join("; "))
    }
}

/// Lex and parse `source` in one step.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse();
    ParseOutput {
        program,
        errors: parser.errors,
    }
}

#[cfg(test)]
mod tests;
