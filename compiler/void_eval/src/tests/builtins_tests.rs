//! Tests for the builtin table.

use pretty_assertions::assert_eq;

use crate::builtins::{self, Builtin};
use crate::print_handler::PrintHandlerImpl;
use crate::value::Value;
use crate::BufferPrintHandler;

fn builtin(name: &str) -> Builtin {
    builtins::lookup(name).unwrap()
}

fn call(name: &str, args: &[Value]) -> Result<Value, String> {
    builtin(name)
        .call(args, &PrintHandlerImpl::Silent)
        .map_err(|e| e.message())
}

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::Integer).collect())
}

#[test]
fn test_registry_names() {
    let names: Vec<&str> = builtins::names().collect();
    assert_eq!(names, ["len", "first", "last", "push", "pop", "puts"]);
    assert!(builtins::lookup("print").is_none());
}

#[test]
fn test_len() {
    assert_eq!(call("len", &[Value::string("abcd")]), Ok(Value::Integer(4)));
    assert_eq!(call("len", &[Value::string("")]), Ok(Value::Integer(0)));
    assert_eq!(call("len", &[Value::string("héllo")]), Ok(Value::Integer(6)));
    assert_eq!(call("len", &[ints(&[1, 2, 3])]), Ok(Value::Integer(3)));
    assert_eq!(
        call("len", &[Value::Integer(1)]),
        Err("argument to `len` not supported, got INTEGER".to_string())
    );
    assert_eq!(
        call("len", &[Value::string("a"), Value::string("b")]),
        Err("wrong number of arguments to `len`: expected 1, got 2".to_string())
    );
}

#[test]
fn test_first_last() {
    assert_eq!(call("first", &[ints(&[7, 8, 9])]), Ok(Value::Integer(7)));
    assert_eq!(call("last", &[ints(&[7, 8, 9])]), Ok(Value::Integer(9)));
    assert_eq!(
        call("first", &[ints(&[])]),
        Err("`first` called on an empty array".to_string())
    );
    assert_eq!(
        call("last", &[ints(&[])]),
        Err("`last` called on an empty array".to_string())
    );
    assert_eq!(
        call("first", &[Value::string("abc")]),
        Err("argument to `first` not supported, got STRING".to_string())
    );
}

#[test]
fn test_push_leaves_argument_unmodified() {
    let original = ints(&[1, 2]);
    let pushed = call("push", &[original.clone(), Value::Integer(3)]).unwrap();
    assert_eq!(pushed, ints(&[1, 2, 3]));
    assert_eq!(original, ints(&[1, 2]));
    assert_eq!(
        call("push", &[original]),
        Err("wrong number of arguments to `push`: expected 2, got 1".to_string())
    );
}

#[test]
fn test_pop() {
    let original = ints(&[1, 2, 3]);
    assert_eq!(call("pop", &[original.clone()]), Ok(ints(&[1, 2])));
    assert_eq!(original, ints(&[1, 2, 3]));
    assert_eq!(call("pop", &[ints(&[1])]), Ok(ints(&[])));
    assert_eq!(
        call("pop", &[ints(&[])]),
        Err("`pop` called on an empty array".to_string())
    );
}

#[test]
fn test_puts_writes_inspect_form() {
    let print = PrintHandlerImpl::Buffer(BufferPrintHandler::new());
    let result = builtin("puts").call(&[ints(&[1, 2])], &print).unwrap();
    assert_eq!(result, Value::Null);
    builtin("puts").call(&[Value::string("hi")], &print).unwrap();
    assert_eq!(print.get_output(), "<puts: [1, 2]>\n<puts: hi>\n");
}
