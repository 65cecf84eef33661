//! Infix operator semantics.
//!
//! Dispatch is a `match` on the operand pair, then on the operator. Integer
//! arithmetic is checked: overflow and division by zero are errors, never
//! wrapping or panicking.
//!
//! | Operands            | Supported                                  |
//! |---------------------|--------------------------------------------|
//! | integer, integer    | `+ - * /`, all comparisons                 |
//! | string, string      | `+`, all comparisons (lexicographic)       |
//! | array, array        | `+` (new array), `==`/`!=` by identity     |
//! | other same type     | `==`/`!=` only                             |
//! | different types     | error                                      |

use std::cmp::Ordering;
use std::rc::Rc;

use void_ir::InfixOperator;

use crate::errors::{
    division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator, EvalError,
};
use crate::value::Value;

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, operator: InfixOperator) -> Result<Value, EvalError> {
    result
        .map(Value::Integer)
        .ok_or_else(|| integer_overflow(operator.as_symbol()))
}

/// Map an ordering onto a comparison operator.
#[inline]
fn compare(ordering: Ordering, operator: InfixOperator) -> Option<bool> {
    match operator {
        InfixOperator::Lt => Some(ordering.is_lt()),
        InfixOperator::LtEq => Some(ordering.is_le()),
        InfixOperator::Gt => Some(ordering.is_gt()),
        InfixOperator::GtEq => Some(ordering.is_ge()),
        InfixOperator::Eq => Some(ordering.is_eq()),
        InfixOperator::NotEq => Some(ordering.is_ne()),
        InfixOperator::Add | InfixOperator::Sub | InfixOperator::Mul | InfixOperator::Div => None,
    }
}

/// Equality operators only; everything else is `None`.
#[inline]
fn equality(same: bool, operator: InfixOperator) -> Option<bool> {
    match operator {
        InfixOperator::Eq => Some(same),
        InfixOperator::NotEq => Some(!same),
        _ => None,
    }
}

/// Evaluate `left operator right`.
pub fn evaluate_infix(
    operator: InfixOperator,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalError> {
    let result = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => return eval_integer_infix(operator, *a, *b),
        (Value::Str(a), Value::Str(b)) => {
            return eval_string_infix(operator, a, b)
                .ok_or_else(|| unknown_infix_operator(left, operator, right));
        }
        (Value::Array(a), Value::Array(b)) => {
            if operator == InfixOperator::Add {
                return Ok(concat_arrays(a, b));
            }
            equality(Rc::ptr_eq(a, b), operator)
        }
        (Value::Boolean(a), Value::Boolean(b)) => equality(a == b, operator),
        (Value::Null, Value::Null) => equality(true, operator),
        (Value::Function(a), Value::Function(b)) => equality(a.same_closure(b), operator),
        (Value::Builtin(a), Value::Builtin(b)) => equality(a.name() == b.name(), operator),
        (Value::Error(a), Value::Error(b)) => equality(Rc::ptr_eq(a, b), operator),
        _ => return Err(type_mismatch(left, operator, right)),
    };
    result
        .map(Value::Boolean)
        .ok_or_else(|| unknown_infix_operator(left, operator, right))
}

/// Integer operations; division truncates toward zero.
fn eval_integer_infix(operator: InfixOperator, a: i64, b: i64) -> Result<Value, EvalError> {
    match operator {
        InfixOperator::Add => checked_arith(a.checked_add(b), operator),
        InfixOperator::Sub => checked_arith(a.checked_sub(b), operator),
        InfixOperator::Mul => checked_arith(a.checked_mul(b), operator),
        InfixOperator::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), operator)
            }
        }
        InfixOperator::Lt => Ok(Value::Boolean(a < b)),
        InfixOperator::LtEq => Ok(Value::Boolean(a <= b)),
        InfixOperator::Gt => Ok(Value::Boolean(a > b)),
        InfixOperator::GtEq => Ok(Value::Boolean(a >= b)),
        InfixOperator::Eq => Ok(Value::Boolean(a == b)),
        InfixOperator::NotEq => Ok(Value::Boolean(a != b)),
    }
}

/// String concatenation and byte-wise lexicographic comparison.
fn eval_string_infix(operator: InfixOperator, a: &str, b: &str) -> Option<Value> {
    if operator == InfixOperator::Add {
        let mut joined = String::with_capacity(a.len() + b.len());
        joined.push_str(a);
        joined.push_str(b);
        return Some(Value::string(joined));
    }
    compare(a.cmp(b), operator).map(Value::Boolean)
}

/// New array holding the elements of `a` then `b`; elements are shared, not copied.
fn concat_arrays(a: &[Value], b: &[Value]) -> Value {
    let mut joined = Vec::with_capacity(a.len() + b.len());
    joined.extend(a.iter().cloned());
    joined.extend(b.iter().cloned());
    Value::array(joined)
}
