use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Token, TokenKind},
        value::Value,
    },
};

/// Applies `+`, `-`, `*` or `/` to two values.
///
/// Integers use checked arithmetic, with booleans counting as `0` and `1`.
/// When both sides are booleans the result is turned back into a boolean, so
/// `true + true` is `true` and `true - true` is `false`.
///
/// # Errors
/// - `DivisionByZero` if the divisor is zero.
/// - `Overflow` if the result does not fit in an `i64`.
/// - `UnknownOperator` for anything that is not an arithmetic operator.
///
/// # Example
/// ```
/// use lalg::interpreter::{
///     evaluator::arithmetic::apply_arithmetic,
///     lexer::{Token, TokenKind},
///     value::Value,
/// };
///
/// let slash = Token::new(TokenKind::Slash, "/", 1, 1);
/// let result = apply_arithmetic(&slash, Value::Integer(-7), Value::Integer(2)).unwrap();
///
/// assert_eq!(result, Value::Integer(-4));
/// ```
pub fn apply_arithmetic(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
    let both_boolean = matches!((left, right), (Value::Boolean(_), Value::Boolean(_)));
    let (a, b) = (left.as_integer(), right.as_integer());

    let result = match operator.kind {
        TokenKind::Plus => a.checked_add(b),
        TokenKind::Minus => a.checked_sub(b),
        TokenKind::Star => a.checked_mul(b),
        TokenKind::Slash => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { line:   operator.line,
                                                          column: operator.column, });
            }
            floor_div(a, b)
        },
        _ => {
            return Err(RuntimeError::UnknownOperator { operator: operator.text.clone(),
                                                       line:     operator.line,
                                                       column:   operator.column, });
        },
    }.ok_or(RuntimeError::Overflow { line:   operator.line,
                                     column: operator.column, })?;

    Ok(if both_boolean {
        Value::Boolean(result != 0)
    } else {
        Value::Integer(result)
    })
}

/// Integer division rounding toward negative infinity.
///
/// `None` on overflow or a zero divisor.
///
/// # Example
/// ```
/// use lalg::interpreter::evaluator::arithmetic::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(i64::MIN, -1), None);
/// ```
#[must_use]
pub fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Evaluates a relational operator.
///
/// Both sides must have the same type. `false` orders before `true`.
///
/// # Errors
/// - `TypeError` for mixed operand types.
/// - `UnknownOperator` for anything that is not relational.
pub fn compare(operator: &Token, left: Value, right: Value) -> EvalResult<bool> {
    let ordering: Ordering = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a.cmp(&b),
        (Value::Boolean(a), Value::Boolean(b)) => a.cmp(&b),
        _ => {
            return Err(RuntimeError::TypeError { details: format!("cannot compare {} with {}",
                                                                  left.type_of(),
                                                                  right.type_of()),
                                                 line:    operator.line, });
        },
    };

    match operator.kind {
        TokenKind::Less => Ok(ordering.is_lt()),
        TokenKind::LessEqual => Ok(ordering.is_le()),
        TokenKind::Greater => Ok(ordering.is_gt()),
        TokenKind::GreaterEqual => Ok(ordering.is_ge()),
        TokenKind::Equal => Ok(ordering.is_eq()),
        TokenKind::NotEqual => Ok(ordering.is_ne()),
        _ => Err(RuntimeError::UnknownOperator { operator: operator.text.clone(),
                                                 line:     operator.line,
                                                 column:   operator.column, }),
    }
}
