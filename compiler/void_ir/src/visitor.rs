//! AST Visitor Pattern
//!
//! Read-only traversal of the syntax tree. Default `visit_*` methods call the
//! matching `walk_*` function, which recurses into children in source order.
//! Override a `visit_*` method to act on a node kind; call the `walk_*`
//! function from the override to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountCalls {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expression(&mut self, expr: &'ast Expression) {
//!         if matches!(expr, Expression::Call { .. }) {
//!             self.count += 1;
//!         }
//!         walk_expression(self, expr);
//!     }
//! }
//! ```

use void_stack::ensure_sufficient_stack;

use crate::ast::{
    BlockStatement, Expression, FunctionLiteral, Identifier, IfExpression, Program, Statement,
};

pub trait Visitor<'ast> {
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }

    fn visit_statement(&mut self, statement: &'ast Statement) {
        walk_statement(self, statement);
    }

    fn visit_block(&mut self, block: &'ast BlockStatement) {
        walk_block(self, block);
    }

    fn visit_expression(&mut self, expr: &'ast Expression) {
        walk_expression(self, expr);
    }

    fn visit_function(&mut self, function: &'ast FunctionLiteral) {
        walk_function(self, function);
    }

    fn visit_if(&mut self, if_expr: &'ast IfExpression) {
        walk_if(self, if_expr);
    }

    /// Identifiers have no children.
    fn visit_identifier(&mut self, ident: &'ast Identifier) {
        let _ = ident;
    }
}

pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, program: &'ast Program) {
    for statement in &program.statements {
        visitor.visit_statement(statement);
    }
}

pub fn walk_statement<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    statement: &'ast Statement,
) {
    match statement {
        Statement::Let { name, value } => {
            visitor.visit_identifier(name);
            visitor.visit_expression(value);
        }
        Statement::Return(expr) | Statement::Expression(expr) => visitor.visit_expression(expr),
        Statement::Block(block) => visitor.visit_block(block),
    }
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast BlockStatement) {
    for statement in &block.statements {
        visitor.visit_statement(statement);
    }
}

pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    function: &'ast FunctionLiteral,
) {
    for param in &function.parameters {
        visitor.visit_identifier(param);
    }
    visitor.visit_block(&function.body);
}

pub fn walk_if<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, if_expr: &'ast IfExpression) {
    visitor.visit_expression(&if_expr.condition);
    visitor.visit_block(&if_expr.consequence);
    if let Some(alternative) = &if_expr.alternative {
        visitor.visit_block(alternative);
    }
}

/// Grows the stack as needed, so arbitrarily nested expressions can be walked.
pub fn walk_expression<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expression) {
    ensure_sufficient_stack(|| walk_expression_children(visitor, expr));
}

fn walk_expression_children<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expression,
) {
    match expr {
        Expression::Identifier(ident) => visitor.visit_identifier(ident),
        Expression::Integer(_) | Expression::Boolean(_) | Expression::Str(_) => {}
        Expression::Array(elements) => {
            for element in elements {
                visitor.visit_expression(element);
            }
        }
        Expression::Function(function) => visitor.visit_function(function),
        Expression::If(if_expr) => visitor.visit_if(if_expr),
        Expression::Call {
            function,
            arguments,
        } => {
            visitor.visit_expression(function);
            for argument in arguments {
                visitor.visit_expression(argument);
            }
        }
        Expression::Index { left, index } => {
            visitor.visit_expression(left);
            visitor.visit_expression(index);
        }
        Expression::Prefix { operand, .. } => visitor.visit_expression(operand),
        Expression::Infix { left, right, .. } => {
            visitor.visit_expression(left);
            visitor.visit_expression(right);
        }
    }
}
