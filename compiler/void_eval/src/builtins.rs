//! Native functions available under fixed names in every scope.
//!
//! A user binding of the same name shadows the builtin.

use std::rc::Rc;

use tracing::trace;

use crate::errors::{
    empty_array, integer_overflow, unsupported_argument, wrong_builtin_arg_count, EvalError,
};
use crate::print_handler::PrintHandlerImpl;
use crate::value::Value;

/// Native handler: receives the already evaluated arguments.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> Result<Value, EvalError>;

#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: &[Value], print: &PrintHandlerImpl) -> Result<Value, EvalError> {
        trace!(builtin = self.name, argc = args.len(), "builtin call");
        (self.func)(args, print)
    }
}

static BUILTINS: [Builtin; 6] = [
    Builtin {
        name: "len",
        func: len,
    },
    Builtin {
        name: "first",
        func: first,
    },
    Builtin {
        name: "last",
        func: last,
    },
    Builtin {
        name: "push",
        func: push,
    },
    Builtin {
        name: "pop",
        func: pop,
    },
    Builtin {
        name: "puts",
        func: puts,
    },
];

/// The builtin registered under `name`.
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name).copied()
}

/// Names of every builtin, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(Builtin::name)
}

// Argument helpers

fn check_arity(name: &'static str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_builtin_arg_count(name, expected, args.len()))
    }
}

fn array_arg<'v>(name: &'static str, value: &'v Value) -> Result<&'v Rc<Vec<Value>>, EvalError> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(unsupported_argument(name, other)),
    }
}

fn non_empty_array_arg<'v>(name: &'static str, value: &'v Value) -> Result<&'v [Value], EvalError> {
    let elements = array_arg(name, value)?;
    if elements.is_empty() {
        Err(empty_array(name))
    } else {
        Ok(elements)
    }
}

fn count(n: usize) -> Result<Value, EvalError> {
    i64::try_from(n)
        .map(Value::Integer)
        .map_err(|_| integer_overflow("len"))
}

// Handlers

/// `len(string|array)`; strings count bytes.
fn len(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("len", args, 1)?;
    match &args[0] {
        Value::Str(text) => count(text.len()),
        Value::Array(elements) => count(elements.len()),
        other => Err(unsupported_argument("len", other)),
    }
}

fn first(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("first", args, 1)?;
    let elements = non_empty_array_arg("first", &args[0])?;
    Ok(elements[0].clone())
}

fn last(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("last", args, 1)?;
    let elements = non_empty_array_arg("last", &args[0])?;
    Ok(elements[elements.len() - 1].clone())
}

/// `push(array, value)`; returns a new array and leaves the argument untouched.
fn push(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("push", args, 2)?;
    let elements = array_arg("push", &args[0])?;
    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend(elements.iter().cloned());
    pushed.push(args[1].clone());
    Ok(Value::array(pushed))
}

/// `pop(array)`; returns a new array without the last element.
fn pop(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("pop", args, 1)?;
    let elements = non_empty_array_arg("pop", &args[0])?;
    Ok(Value::array(elements[..elements.len() - 1].to_vec()))
}

/// `puts(value)`; writes `<puts: INSPECT>` and a newline.
fn puts(args: &[Value], print: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("puts", args, 1)?;
    print.println(&format!("<puts: {}>", args[0]));
    Ok(Value::Null)
}
