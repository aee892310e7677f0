use crate::{ast::BinaryOperator, util::num::bool_to_number};

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic follows IEEE-754 `f64` semantics, so dividing by zero yields an
/// infinity or NaN rather than an error. Comparisons yield exactly `1.0` or
/// `0.0`.
///
/// # Example
/// ```
/// use emojilang::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 10.0, 3.0), 7.0);
/// assert_eq!(eval_binary(BinaryOperator::NotEqual, 5.0, 5.0), 0.0);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Greater => bool_to_number(left > right),
        BinaryOperator::Less => bool_to_number(left < right),
        BinaryOperator::Equal => bool_to_number(left == right),
        BinaryOperator::NotEqual => bool_to_number(left != right),
    }
}
