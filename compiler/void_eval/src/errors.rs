//! Evaluation errors and control signals.
//!
//! `EvalErrorKind` carries the structured data of each failure; its
//! `Display` is the message a user sees inside `<error: ...>`. Factory
//! functions are the public way to build errors.
//!
//! Evaluation threads [`EvalResult`]: a `Return` or an `Error` travels up
//! the `Err` side and every statement sequence stops at the first one.

use thiserror::Error;
use void_ir::{InfixOperator, PrefixOperator};

use crate::value::Value;

/// Result of evaluating a node.
pub type EvalResult = Result<Value, ControlAction>;

/// Non-local exits from a statement sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// `return value`; stops the innermost enclosing statement sequence.
    Return(Value),
    /// A runtime error; stops every enclosing sequence up to `evaluate`.
    Error(EvalError),
}

impl From<EvalError> for ControlAction {
    fn from(error: EvalError) -> Self {
        ControlAction::Error(error)
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in `{operator}`")]
    IntegerOverflow { operator: &'static str },

    // Operators
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: &'static str,
        operator: &'static str,
        right: &'static str,
    },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        operator: &'static str,
        right: &'static str,
    },
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: &'static str,
        operand: &'static str,
    },

    // Access
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("index operator not supported: {left}[{index}]")]
    IndexNotSupported {
        left: &'static str,
        index: &'static str,
    },
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    // Calls
    #[error("not a function: {type_name}")]
    NotCallable { type_name: &'static str },
    #[error("wrong number of arguments: expected {expected}, got {got}")]
    WrongArgCount { expected: usize, got: usize },
    #[error("wrong number of arguments to `{name}`: expected {expected}, got {got}")]
    WrongBuiltinArgCount {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("argument to `{name}` not supported, got {type_name}")]
    UnsupportedArgument {
        name: &'static str,
        type_name: &'static str,
    },
    #[error("`{name}` called on an empty array")]
    EmptyArray { name: &'static str },
    #[error("function literal #{id} is not loaded")]
    FunctionNotLoaded { id: u32 },

    // Session
    #[error("parse error: {summary}")]
    ParseFailed { summary: String },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    /// The user-facing message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

// Factory functions

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operator: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operator })
}

#[cold]
pub fn type_mismatch(left: &Value, operator: InfixOperator, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        operator: operator.as_symbol(),
        right: right.type_name(),
    })
}

#[cold]
pub fn unknown_infix_operator(left: &Value, operator: InfixOperator, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOperator {
        left: left.type_name(),
        operator: operator.as_symbol(),
        right: right.type_name(),
    })
}

#[cold]
pub fn unknown_prefix_operator(operator: PrefixOperator, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator {
        operator: operator.as_symbol(),
        operand: operand.type_name(),
    })
}

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn index_not_supported(left: &Value, index: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotSupported {
        left: left.type_name(),
        index: index.type_name(),
    })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn not_callable(callee: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: callee.type_name(),
    })
}

#[cold]
pub fn wrong_arg_count(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount { expected, got })
}

#[cold]
pub fn wrong_builtin_arg_count(name: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongBuiltinArgCount {
        name,
        expected,
        got,
    })
}

#[cold]
pub fn unsupported_argument(name: &'static str, argument: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedArgument {
        name,
        type_name: argument.type_name(),
    })
}

#[cold]
pub fn empty_array(name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyArray { name })
}

#[cold]
pub fn function_not_loaded(id: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionNotLoaded { id })
}

#[cold]
pub fn parse_failed(summary: String) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ParseFailed { summary })
}
