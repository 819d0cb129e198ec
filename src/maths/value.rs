//! Rendered values.
//!
//! A rendered operand is either a number, which keeps its numeric identity so that complex
//! number algebra can run on it, or text produced by an operator. Numbers are printed the way
//! the quiz pages show them: integers plainly, floats in their shortest round-trip form with a
//! trailing `.0` when integral (`2.0`, `-0.2`, `1.6`), and in exponent form when very small or
//! very large (`1e-05`, `1e+17`).

use std::fmt;

use crate::maths::errors::MathsError;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Shortest round-trip digits; exponent form (`1e-05`, `1.5e+17`) for magnitudes outside
/// `[1e-4, 1e16)`, a trailing `.0` on integral values inside it.
fn float_notation(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{:e}", x);
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
    }
    if x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", float_notation(*x)),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl Value {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Value::Text(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            Value::Text(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    /// Applies a binary arithmetic operation. Two integers stay integral (overflow is an
    /// error), anything involving a float becomes a float, text is rejected.
    fn combine(
        &self,
        rhs: &Value,
        symbol: &str,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Value, MathsError> {
        match (self, rhs) {
            (Value::Text(t), _) | (_, Value::Text(t)) => Err(MathsError::NonNumeric(t.clone())),
            (Value::Integer(a), Value::Integer(b)) => {
                int_op(*a, *b).map(Value::Integer).ok_or_else(|| {
                    MathsError::UndefinedArithmetic(format!(
                        "integer overflow in {} {} {}",
                        a, symbol, b
                    ))
                })
            }
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => Ok(Value::Float(float_op(x, y))),
                _ => Err(MathsError::NonNumeric(format!("{} {} {}", a, symbol, b))),
            },
        }
    }

    pub fn try_add(&self, rhs: &Value) -> Result<Value, MathsError> {
        self.combine(rhs, "+", i64::checked_add, |x, y| x + y)
    }

    pub fn try_sub(&self, rhs: &Value) -> Result<Value, MathsError> {
        self.combine(rhs, "-", i64::checked_sub, |x, y| x - y)
    }

    pub fn try_mul(&self, rhs: &Value) -> Result<Value, MathsError> {
        self.combine(rhs, "*", i64::checked_mul, |x, y| x * y)
    }

    /// True division, always a float. A zero divisor is reported as undefined arithmetic.
    pub fn try_div(&self, rhs: &Value) -> Result<Value, MathsError> {
        let (Some(x), Some(y)) = (self.as_f64(), rhs.as_f64()) else {
            let text = if self.is_numeric() { rhs } else { self };
            return Err(MathsError::NonNumeric(text.to_string()));
        };
        if y == 0.0 {
            return Err(MathsError::UndefinedArithmetic(format!(
                "division of {} by zero",
                self
            )));
        }
        Ok(Value::Float(x / y))
    }

    pub fn squared(&self) -> Result<Value, MathsError> {
        self.try_mul(self)
    }
}
