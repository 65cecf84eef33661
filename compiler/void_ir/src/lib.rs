//! Void IR - tokens and the syntax tree.
//!
//! This crate holds the data shared by every phase of the Void pipeline:
//! - [`Token`] and [`TokenKind`] produced by the lexer
//! - The AST ([`Program`], [`Statement`], [`Expression`], ...) produced by the parser
//! - Canonical stringification of the AST (`Display`), fully parenthesized
//! - A read-only [`Visitor`] for traversals that need to find or collect nodes
//!
//! The AST is a plain owned tree: every node is owned by exactly one parent
//! and is never mutated after the parser returns it.

pub mod ast;
mod token;
pub mod visitor;

pub use ast::{
    BlockStatement, Expression, FunctionId, FunctionLiteral, Identifier, IfExpression,
    InfixOperator, PrefixOperator, Program, Statement,
};
pub use token::{Token, TokenKind};
pub use visitor::Visitor;
