use crate::maths::errors::MathsError;
use crate::maths::operands::{Bodmas, MathsOperand, Operand, RenderOptions};
use crate::maths::operators::Operator;
use crate::maths::value::Value;

/// An operator applied to an ordered, non-empty list of operands.
///
/// The expression's own precedence is the operator's order. Rendering is two-phase: the
/// operator produces a `Rendered` value tagged with its precedence, which is then rendered to
/// the final value.
#[derive(Clone, Debug)]
pub struct Expression {
    operands: Vec<Operand>,
    operator: Operator,
}

impl Expression {
    /// # Errors
    /// `MathsError::EmptyExpression` for zero operands, `MathsError::InvalidArity` when a unary
    /// operator gets more than one.
    pub fn new<I, O>(operands: I, operator: Operator) -> Result<Self, MathsError>
    where
        I: IntoIterator<Item = O>,
        O: Into<Operand>,
    {
        let operands: Vec<Operand> = operands.into_iter().map(Into::into).collect();
        operator.check_arity(operands.len())?;
        Ok(Expression { operands, operator })
    }

    /// product of `operands`, multiplication being the default operator
    pub fn from_operands<I, O>(operands: I) -> Result<Self, MathsError>
    where
        I: IntoIterator<Item = O>,
        O: Into<Operand>,
    {
        Self::new(operands, Operator::default())
    }

    pub fn unary(operand: impl Into<Operand>, operator: Operator) -> Result<Self, MathsError> {
        Self::new([operand.into()], operator)
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Renders with default options: LaTeX, thread-local random source.
    pub fn to_latex(&self) -> Result<String, MathsError> {
        Ok(self.render(&mut RenderOptions::new())?.to_string())
    }
}

impl MathsOperand for Expression {
    fn order(&self) -> Option<Bodmas> {
        Some(self.operator.order())
    }

    fn render(&self, options: &mut RenderOptions<'_>) -> Result<Value, MathsError> {
        self.operator.apply(&self.operands, options)?.render(options)
    }
}
