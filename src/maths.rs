#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

/// notation of the imaginary unit
pub const IMAGINARY_NOTATION: &str = "j";

/// error type shared by the whole maths module
pub mod errors;
///________________________________________________________________________________________________________________________________
/// rendered values: integers, floats and text, with checked arithmetic
///# Example
/// ```
/// use complexity::maths::value::Value;
/// let a = Value::from(3);
/// let b = Value::from(-2);
/// assert_eq!(a.try_div(&Value::from(5)).unwrap().to_string(), "0.6");
/// assert_eq!(a.try_mul(&b).unwrap(), Value::Integer(-6));
/// ```
pub mod value;
///________________________________________________________________________________________________________________________________
/// # Operands
/// constants, random constants and variables: the leaves of expression trees
///# Example
/// ```
/// use complexity::maths::operands::{MathsOperand, RandomConstant, RenderOptions, Variable};
/// use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let mut options = RenderOptions::with_random(&mut rng);
/// let n = RandomConstant::new(1, 10);
/// let first = n.render(&mut options).unwrap();
/// // drawn once, then cached
/// assert_eq!(n.render(&mut options).unwrap(), first);
/// assert_eq!(Variable::new("x").render(&mut options).unwrap().to_string(), "x");
/// ```
pub mod operands;
///________________________________________________________________________________________________________________________________
/// add, subtract, multiply, divide, abs and sqrt rendering rules
pub mod operators;
///________________________________________________________________________________________________________________________________
/// # Expression tree
///# Example
/// ```
/// use complexity::maths::expression::Expression;
/// use complexity::maths::operands::{Constant, Operand, Variable};
/// use complexity::maths::operators::Operator;
/// let xy: Vec<Operand> = vec![Constant::new(2).into(), Constant::new(3).into(),
///     Variable::new("x").into(), Variable::new("y").into()];
/// let e = Expression::from_operands(xy).unwrap();
/// assert_eq!(e.to_latex().unwrap(), r"(2 \times 3)xy");
/// let frac = Expression::new([Variable::new("x"), Variable::new("y")], Operator::Divide).unwrap();
/// assert_eq!(frac.to_latex().unwrap(), r"\frac{ x }{ y }");
/// ```
pub mod expression;
///________________________________________________________________________________________________________________________________
/// # Complex numbers
///# Example
/// ```
/// use complexity::maths::complex::{ComplexNumber, compute_divide, compute_modulus, compute_product};
/// let z = ComplexNumber::from_parts(3, 3).unwrap();
/// let w = ComplexNumber::from_parts(2, 1).unwrap();
/// assert_eq!(compute_product(&[z, w]).unwrap().to_latex().unwrap(), "3 + 9j");
///
/// let z = ComplexNumber::from_parts(3, 2).unwrap();
/// let w = ComplexNumber::from_parts(1, -2).unwrap();
/// assert_eq!(compute_divide(&z, &w).unwrap().to_latex().unwrap(), "-0.2 + 1.6j");
/// assert_eq!(compute_modulus(&z).unwrap().to_latex().unwrap(), r"\sqrt{ 13 }");
/// ```
pub mod complex;

#[cfg(test)]
mod maths_tests;
