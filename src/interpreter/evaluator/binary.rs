use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary operation between two already evaluated operands.
///
/// Arithmetic (`+`, `-`, `*`) stays in checked integer arithmetic when both
/// operands are integers and is performed on `f64` otherwise. Division is
/// always real-valued and is not guarded against a zero divisor. `==` and
/// `<>` are defined for every pair of values; the ordering comparisons
/// require numbers.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
/// assert_eq!(sum.unwrap(), Value::Integer(7));
///
/// let half = eval_binary(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2), 1);
/// assert_eq!(half.unwrap(), Value::Real(3.5));
///
/// let bad = eval_binary(BinaryOperator::Less, &Value::Bool(true), &Value::Integer(2), 1);
/// assert!(bad.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Add | Sub | Mul => eval_arithmetic(op, left, right, line),
        Div => {
            let (numerator, denominator) = numeric_operands(op, left, right, line)?;
            Ok(Value::Real(numerator / denominator))
        },
        Equal | NotEqual => {
            let is_equal = left.loosely_equals(right, line)?;
            Ok(Value::Bool(equality_op_result(op, is_equal)))
        },
        Less | LessEqual | Greater | GreaterEqual => eval_comparison(op, left, right, line),
    }
}

/// Maps an equality operator and a boolean equality result to the final
/// boolean value, inverting it for `<>`.
fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

fn eval_arithmetic(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Mul, Sub};

    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        let result = match op {
            Add => a.checked_add(*b),
            Sub => a.checked_sub(*b),
            Mul => a.checked_mul(*b),
            _ => unreachable!(),
        };
        return result.map(Value::Integer)
                     .ok_or(RuntimeError::Overflow { line });
    }

    let (a, b) = numeric_operands(op, left, right, line)?;
    Ok(Value::Real(match op {
                       Add => a + b,
                       Sub => a - b,
                       Mul => a * b,
                       _ => unreachable!(),
                   }))
}

fn eval_comparison(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    let ordering = if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        Some(a.cmp(b))
    } else {
        let (a, b) = numeric_operands(op, left, right, line)?;
        a.partial_cmp(&b)
    };

    // NaN is unordered, so every ordering comparison with it is false.
    Ok(Value::Bool(ordering.is_some_and(|ordering| match op {
                                            BinaryOperator::Less => ordering.is_lt(),
                                            BinaryOperator::LessEqual => ordering.is_le(),
                                            BinaryOperator::Greater => ordering.is_gt(),
                                            BinaryOperator::GreaterEqual => ordering.is_ge(),
                                            _ => unreachable!(),
                                        })))
}

/// Promotes both operands to `f64`, rejecting anything that is not a
/// number.
fn numeric_operands(op: BinaryOperator,
                    left: &Value,
                    right: &Value,
                    line: usize)
                    -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
            Ok((left.as_real(line)?, right.as_real(line)?))
        },
        _ => Err(RuntimeError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                                            left.kind(),
                                                            right.kind()),
                                           line }),
    }
}
