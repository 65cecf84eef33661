//! Runtime values.
//!
//! Scalars are stored inline. Strings and arrays are reference counted, so
//! cloning a value never deep-copies; arrays built from other arrays share
//! their element values.
//!
//! `Display` is the inspect rendering printed by the REPL and by `puts`.

use std::fmt;
use std::rc::Rc;

use crate::arena::FunctionRef;
use crate::builtins::Builtin;
use crate::environment::Environment;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Str(Rc<str>),
    Array(Rc<Vec<Value>>),
    Function(FunctionValue),
    Builtin(Builtin),
    /// An error as seen by the embedder; produced only at the `evaluate` boundary.
    Error(Rc<str>),
    Null,
}

impl Value {
    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Value::Str(text.into())
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(elements))
    }

    pub fn error(message: impl Into<Rc<str>>) -> Self {
        Value::Error(message.into())
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Error(_) => "ERROR",
            Value::Null => "NULL",
        }
    }

    /// Only `false` and `null` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Function(function) => f.write_str(function.rendering()),
            Value::Builtin(builtin) => write!(f, "<builtin: {}>", builtin.name()),
            Value::Error(message) => write!(f, "<error: {message}>"),
            Value::Null => f.write_str("null"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Array(elements) => f.debug_tuple("Array").field(elements).finish(),
            Value::Function(function) => f.debug_tuple("Function").field(function).finish(),
            Value::Builtin(builtin) => f.debug_tuple("Builtin").field(&builtin.name()).finish(),
            Value::Error(message) => f.debug_tuple("Error").field(message).finish(),
            Value::Null => f.write_str("Null"),
        }
    }
}

/// Host-side equality.
///
/// Arrays compare element-wise here; the language's `==` compares arrays by
/// identity instead (see `operators`). Functions compare by identity in both.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Str(a), Value::Str(b)) | (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.same_closure(b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

/// A user function: its defining literal plus the scope it closes over.
///
/// Every evaluation of a function literal creates a fresh closure scope
/// whose parent is the defining scope. Calls bind parameters into that same
/// scope, so all calls of one function value share their bindings.
#[derive(Clone)]
pub struct FunctionValue {
    source: FunctionRef,
    closure: Environment,
    arity: usize,
    rendering: Rc<str>,
}

impl FunctionValue {
    pub fn new(
        source: FunctionRef,
        closure: Environment,
        arity: usize,
        rendering: Rc<str>,
    ) -> Self {
        FunctionValue {
            source,
            closure,
            arity,
            rendering,
        }
    }

    #[inline]
    pub fn source(&self) -> FunctionRef {
        self.source
    }

    #[inline]
    pub fn closure(&self) -> &Environment {
        &self.closure
    }

    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The literal's canonical source form.
    #[inline]
    pub fn rendering(&self) -> &str {
        &self.rendering
    }

    /// Whether both values came from the same evaluation of a literal.
    pub fn same_closure(&self, other: &FunctionValue) -> bool {
        self.source == other.source && self.closure.ptr_eq(&other.closure)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("source", &self.source)
            .field("rendering", &self.rendering)
            .finish_non_exhaustive()
    }
}
