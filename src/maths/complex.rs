//! # Complex numbers
//!
//! `a + bj` represented as the expression tree `a + (b × j)`, plus modulus, product and
//! quotient computed on the frozen real/imaginary values and returned as new renderable
//! trees.

use log::debug;

use crate::maths::IMAGINARY_NOTATION;
use crate::maths::errors::MathsError;
use crate::maths::expression::Expression;
use crate::maths::operands::{Bodmas, Constant, MathsOperand, Operand, RenderOptions, Variable};
use crate::maths::operators::Operator;
use crate::maths::value::Value;

/// `im × j`, e.g. `8j`
pub fn imaginary_number(im: impl Into<Operand>) -> Result<Expression, MathsError> {
    Expression::from_operands([im.into(), Variable::new(IMAGINARY_NOTATION).into()])
}

/// A complex number `re + im j`.
///
/// `re` and `im` are rendered once, when the number is built, and kept as value snapshots.
/// Random constants inside it are therefore resolved at construction and all algebra below
/// works on those snapshots.
#[derive(Clone, Debug)]
pub struct ComplexNumber {
    re: Value,
    im: Value,
    expression: Expression,
}

impl ComplexNumber {
    pub fn new(re: impl Into<Operand>, im: impl Into<Operand>) -> Result<Self, MathsError> {
        Self::with_options(re, im, &mut RenderOptions::new())
    }

    /// Builds the number, resolving its parts with `options` (e.g. a seeded random source).
    pub fn with_options(
        re: impl Into<Operand>,
        im: impl Into<Operand>,
        options: &mut RenderOptions<'_>,
    ) -> Result<Self, MathsError> {
        let (re, im) = (re.into(), im.into());
        let re_value = re.render(options)?;
        let im_value = im.render(options)?;
        let expression = Expression::new([re, imaginary_number(im)?.into()], Operator::Add)?;
        Ok(ComplexNumber {
            re: re_value,
            im: im_value,
            expression,
        })
    }

    /// from two numbers, e.g. `ComplexNumber::from_parts(3, -2)`
    pub fn from_parts(re: impl Into<Value>, im: impl Into<Value>) -> Result<Self, MathsError> {
        Self::new(Constant::new(re), Constant::new(im))
    }

    pub fn re(&self) -> &Value {
        &self.re
    }

    pub fn im(&self) -> &Value {
        &self.im
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn to_latex(&self) -> Result<String, MathsError> {
        self.expression.to_latex()
    }

    pub fn modulus(&self) -> Result<Expression, MathsError> {
        compute_modulus(self)
    }

    /// `self` times each of `others`, left to right
    pub fn product(&self, others: &[ComplexNumber]) -> Result<ComplexNumber, MathsError> {
        others.iter().try_fold(self.clone(), |zw, w| multiply_pair(&zw, w))
    }

    pub fn divide(&self, w: &ComplexNumber) -> Result<ComplexNumber, MathsError> {
        compute_divide(self, w)
    }
}

impl MathsOperand for ComplexNumber {
    fn order(&self) -> Option<Bodmas> {
        self.expression.order()
    }

    fn render(&self, options: &mut RenderOptions<'_>) -> Result<Value, MathsError> {
        self.expression.render(options)
    }
}

impl From<ComplexNumber> for Operand {
    fn from(z: ComplexNumber) -> Self {
        Operand::Expression(z.expression)
    }
}

/// |z| = sqrt(a*a + b*b), the squared sum being `operands()[0]` of the result
pub fn compute_modulus(z: &ComplexNumber) -> Result<Expression, MathsError> {
    let (a, b) = (z.re(), z.im());
    let squared = a.squared()?.try_add(&b.squared()?)?;
    debug!("|{} + {}j|^2 = {}", a, b, squared);
    Expression::unary(Constant::new(squared), Operator::Sqrt)
}

/// Product of all `operands`, folded left to right.
///
/// # Errors
/// `MathsError::EmptyProduct` when `operands` is empty.
pub fn compute_product(operands: &[ComplexNumber]) -> Result<ComplexNumber, MathsError> {
    let (first, rest) = operands.split_first().ok_or(MathsError::EmptyProduct)?;
    first.product(rest)
}

// (a + bj)(c + dj) = (ac - bd) + (ad + cb)j
fn multiply_pair(z: &ComplexNumber, w: &ComplexNumber) -> Result<ComplexNumber, MathsError> {
    let (a, b) = (z.re(), z.im());
    let (c, d) = (w.re(), w.im());
    let re = a.try_mul(c)?.try_sub(&b.try_mul(d)?)?;
    let im = a.try_mul(d)?.try_add(&c.try_mul(b)?)?;
    debug!("({} + {}j)({} + {}j) = {} + {}j", a, b, c, d, re, im);
    ComplexNumber::from_parts(re, im)
}

/// `z / w` by multiplying through with the conjugate of `w`:
///
/// ```text
/// (a + bj)/(c + dj) = ((ac + bd) + (cb - ad)j) / (c*c + d*d)
/// ```
///
/// A zero `w` is not checked up front; the division itself fails with
/// `MathsError::UndefinedArithmetic`.
pub fn compute_divide(z: &ComplexNumber, w: &ComplexNumber) -> Result<ComplexNumber, MathsError> {
    let (a, b) = (z.re(), z.im());
    let (c, d) = (w.re(), w.im());
    let divisor = c.squared()?.try_add(&d.squared()?)?;
    let re = a.try_mul(c)?.try_add(&b.try_mul(d)?)?.try_div(&divisor)?;
    let im = c.try_mul(b)?.try_sub(&a.try_mul(d)?)?.try_div(&divisor)?;
    debug!("({} + {}j)/({} + {}j) = {} + {}j", a, b, c, d, re, im);
    ComplexNumber::from_parts(re, im)
}
