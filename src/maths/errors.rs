use std::fmt;

use crate::maths::operands::Bodmas;

/// Error types for building, rendering and computing with maths expressions
#[derive(Debug, Clone, PartialEq)]
pub enum MathsError {
    /// an expression was built from zero operands
    EmptyExpression,
    /// operator received a number of operands it cannot render
    InvalidArity {
        operator: String,
        expected: usize,
        found: usize,
    },
    /// rendering requested in a format the operator does not define
    UnsupportedFormat(String),
    /// random constant drawn from a range with no members
    EmptyRange { start: i64, end: i64, step: i64 },
    /// arithmetic attempted on a non-numeric rendered value
    NonNumeric(String),
    /// division by zero or integer overflow
    UndefinedArithmetic(String),
    /// product of no complex numbers
    EmptyProduct,
}

impl fmt::Display for MathsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathsError::EmptyExpression => write!(f, "Expression requires at least one operand"),
            MathsError::InvalidArity {
                operator,
                expected,
                found,
            } => write!(
                f,
                "Operator {} takes {} operand(s), got {}",
                operator, expected, found
            ),
            MathsError::UnsupportedFormat(format) => {
                write!(f, "Unsupported render format: {}", format)
            }
            MathsError::EmptyRange { start, end, step } => write!(
                f,
                "Empty range for random constant: start {}, end {}, step {}",
                start, end, step
            ),
            MathsError::NonNumeric(value) => {
                write!(f, "Arithmetic on non-numeric value: {}", value)
            }
            MathsError::UndefinedArithmetic(msg) => write!(f, "Undefined arithmetic: {}", msg),
            MathsError::EmptyProduct => write!(f, "Product requires at least one complex number"),
        }
    }
}

impl std::error::Error for MathsError {}

impl MathsError {
    /// arity error for a unary operator
    pub fn arity(operator: &str, found: usize) -> Self {
        MathsError::InvalidArity {
            operator: operator.to_string(),
            expected: 1,
            found,
        }
    }

    pub(crate) fn unsupported_format_for(operator: &str, order: Bodmas, format: &str) -> Self {
        MathsError::UnsupportedFormat(format!("{} (operator {} at {})", format, operator, order))
    }
}
