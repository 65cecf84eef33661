//! Prefix operator semantics.

use void_ir::PrefixOperator;

use crate::errors::{integer_overflow, unknown_prefix_operator, EvalError};
use crate::value::Value;

/// Evaluate `operator operand`.
///
/// `!` negates truthiness and accepts any operand; `-` accepts integers only.
pub fn evaluate_prefix(operator: PrefixOperator, operand: &Value) -> Result<Value, EvalError> {
    match (operator, operand) {
        (PrefixOperator::Not, value) => Ok(Value::Boolean(!value.is_truthy())),
        (PrefixOperator::Neg, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow(operator.as_symbol())),
        (PrefixOperator::Neg, other) => Err(unknown_prefix_operator(operator, other)),
    }
}
