//! Abstract syntax tree.
//!
//! Statements and expressions are closed enums dispatched by `match`. Child
//! expressions are boxed; there is no sharing between nodes.
//!
//! Function literals carry a [`FunctionId`] assigned by the parser. The id is
//! unique within one parsed [`Program`], which lets runtime function values
//! refer back to their defining node by `(program, id)` instead of by pointer.

mod display;
mod operators;

pub use operators::{InfixOperator, PrefixOperator};

use crate::visitor::{walk_function, Visitor};

/// A parsed source unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    /// All function literals in the program, outermost first, in source order.
    pub fn functions(&self) -> Vec<&FunctionLiteral> {
        let mut collector = FunctionCollector::default();
        collector.visit_program(self);
        collector.functions
    }

    /// Find the function literal with the given id.
    pub fn function(&self, id: FunctionId) -> Option<&FunctionLiteral> {
        let mut finder = FunctionFinder { id, found: None };
        finder.visit_program(self);
        finder.found
    }
}

#[derive(Default)]
struct FunctionCollector<'ast> {
    functions: Vec<&'ast FunctionLiteral>,
}

impl<'ast> Visitor<'ast> for FunctionCollector<'ast> {
    fn visit_function(&mut self, function: &'ast FunctionLiteral) {
        self.functions.push(function);
        walk_function(self, function);
    }
}

struct FunctionFinder<'ast> {
    id: FunctionId,
    found: Option<&'ast FunctionLiteral>,
}

impl<'ast> Visitor<'ast> for FunctionFinder<'ast> {
    fn visit_function(&mut self, function: &'ast FunctionLiteral) {
        if self.found.is_some() {
            return;
        }
        if function.id == self.id {
            self.found = Some(function);
        } else {
            walk_function(self, function);
        }
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    /// `let name = value`
    Let { name: Identifier, value: Expression },
    /// `return value`
    Return(Expression),
    /// A bare expression.
    Expression(Expression),
    /// `{ statements }`
    Block(BlockStatement),
}

/// An ordered statement sequence delimited by braces.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }
}

/// A name occurrence, either a binding site or a reference.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expression {
    Identifier(Identifier),
    Integer(i64),
    Boolean(bool),
    /// String literal; holds the text between the quotes.
    Str(String),
    Array(Vec<Expression>),
    Function(FunctionLiteral),
    If(IfExpression),
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
    Prefix {
        operator: PrefixOperator,
        operand: Box<Expression>,
    },
    Infix {
        operator: InfixOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

// Dropping a deeply nested tree through the derived glue would recurse once
// per level. Children are moved onto a worklist instead, so teardown runs in
// constant stack.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expression {
    /// Move every child expression into `pending`, leaving leaves behind.
    fn detach_children(&mut self, pending: &mut Vec<Expression>) {
        match self {
            Expression::Identifier(_)
            | Expression::Integer(_)
            | Expression::Boolean(_)
            | Expression::Str(_) => {}
            Expression::Array(elements) => pending.append(elements),
            Expression::Function(function) => detach_block(&mut function.body, pending),
            Expression::If(if_expr) => {
                pending.push(take_boxed(&mut if_expr.condition));
                detach_block(&mut if_expr.consequence, pending);
                if let Some(alternative) = &mut if_expr.alternative {
                    detach_block(alternative, pending);
                }
            }
            Expression::Call {
                function,
                arguments,
            } => {
                pending.push(take_boxed(function));
                pending.append(arguments);
            }
            Expression::Index { left, index } => {
                pending.push(take_boxed(left));
                pending.push(take_boxed(index));
            }
            Expression::Prefix { operand, .. } => pending.push(take_boxed(operand)),
            Expression::Infix { left, right, .. } => {
                pending.push(take_boxed(left));
                pending.push(take_boxed(right));
            }
        }
    }
}

fn take_boxed(slot: &mut Expression) -> Expression {
    std::mem::replace(slot, Expression::Boolean(false))
}

fn detach_block(block: &mut BlockStatement, pending: &mut Vec<Expression>) {
    for statement in block.statements.drain(..) {
        match statement {
            Statement::Let { value, .. }
            | Statement::Return(value)
            | Statement::Expression(value) => pending.push(value),
            Statement::Block(mut inner) => detach_block(&mut inner, pending),
        }
    }
}

/// Identity of a function literal within its [`Program`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct FunctionId(u32);

impl FunctionId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        FunctionId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// `fn (params) { body }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionLiteral {
    pub id: FunctionId,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// `if (condition) { consequence } else { alternative }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

#[cfg(test)]
mod tests;
