use std::{fmt, rc::Rc};

use crate::{ast::FunctionLiteral, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible values that can appear in expressions,
/// bindings, function returns, and conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision number. Only division produces one.
    Real(f64),
    /// A boolean value, produced by comparison operators.
    Bool(bool),
    /// A function value referring to the literal that created it. It does
    /// not capture the scope it was created in.
    Function(Rc<FunctionLiteral>),
    /// The absence of a value: the result of a call that did not `return`,
    /// and the binding of a parameter with no matching argument.
    NoValue,
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`. Integers beyond `2^53`
    /// round to the nearest representable `f64`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real(1).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_real(1).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                self.kind()),
                                               line }),
        }
    }

    /// Returns the truth value used by `if` and `while` conditions.
    ///
    /// Booleans are themselves; numbers are truthy when non-zero (`NaN` is
    /// falsy); functions are truthy; `NoValue` is falsy.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Real(f64::NAN).is_truthy());
    /// assert!(!Value::NoValue.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0 && !r.is_nan(),
            Self::Bool(b) => *b,
            Self::Function(_) => true,
            Self::NoValue => false,
        }
    }

    /// Language-level equality used by `==` and `<>`.
    ///
    /// Numbers compare numerically across integer and real; functions compare
    /// by identity of the literal they refer to; values of different kinds
    /// are never equal.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(2).loosely_equals(&Value::Real(2.0), 1).unwrap());
    /// assert!(!Value::Integer(1).loosely_equals(&Value::Bool(true), 1).unwrap());
    /// assert!(Value::NoValue.loosely_equals(&Value::NoValue, 1).unwrap());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn loosely_equals(&self, other: &Self, line: usize) -> EvalResult<bool> {
        Ok(match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Integer(_) | Self::Real(_), Self::Integer(_) | Self::Real(_)) => {
                self.as_real(line)? == other.as_real(line)?
            },
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::NoValue, Self::NoValue) => true,
            _ => false,
        })
    }

    /// Name of the value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
            Self::Function(_) => "function",
            Self::NoValue => "no value",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Function(function) => write!(f, "fn({})", function.params.join(", ")),
            Self::NoValue => write!(f, "none"),
        }
    }
}
