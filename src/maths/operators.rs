//! # Operators
//!
//! Precedence-tagged rendering rules. Each operator turns its (unrendered) operands into a
//! `Rendered` value that keeps the operator's own precedence, so that nested expressions can
//! decide on brackets before the final text is produced.
//!
//! - `Add`, `Subtract`: delimiter-joined, every operand auto-bracketed at the operator's order
//! - `Multiply`: implicit juxtaposition (`3x`) versus explicit `\times`
//! - `Divide`: `\frac{ a }{ b }` for two operands, a `\div` chain otherwise
//! - `Abs`, `Sqrt`: unary wrappers, self-delimiting

use strum_macros::{Display, EnumIter, EnumString};

use crate::maths::errors::MathsError;
use crate::maths::operands::{
    Bodmas, Format, MathsOperand, Operand, RenderOptions, Rendered, make_brackets,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    #[default]
    Multiply,
    Divide,
    Abs,
    Sqrt,
}

impl Operator {
    pub fn order(&self) -> Bodmas {
        match self {
            Operator::Add => Bodmas::Addition,
            Operator::Subtract => Bodmas::Subtraction,
            Operator::Multiply => Bodmas::Multiplication,
            Operator::Divide => Bodmas::Division,
            Operator::Abs | Operator::Sqrt => Bodmas::Brackets,
        }
    }

    /// formats this operator knows how to render
    pub fn formats(&self) -> &'static [Format] {
        &[Format::LaTeX]
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Abs | Operator::Sqrt)
    }

    pub fn check_arity(&self, found: usize) -> Result<(), MathsError> {
        if found == 0 {
            return Err(MathsError::EmptyExpression);
        }
        if self.is_unary() && found != 1 {
            return Err(MathsError::arity(&self.to_string(), found));
        }
        Ok(())
    }

    /// Renders `operands` in the format selected by `options`.
    pub fn apply(
        &self,
        operands: &[Operand],
        options: &mut RenderOptions<'_>,
    ) -> Result<Rendered, MathsError> {
        self.check_arity(operands.len())?;
        let format = options.format();
        if !self.formats().contains(&format) {
            return Err(MathsError::unsupported_format_for(
                &self.to_string(),
                self.order(),
                &format.to_string(),
            ));
        }
        match format {
            Format::LaTeX => self.latex(operands, options),
        }
    }

    fn latex(
        &self,
        operands: &[Operand],
        options: &mut RenderOptions<'_>,
    ) -> Result<Rendered, MathsError> {
        match self {
            Operator::Add => delimited(Bodmas::Addition, " + ", operands, options),
            Operator::Subtract => delimited(Bodmas::Subtraction, " - ", operands, options),
            Operator::Multiply => multiply(operands, options),
            Operator::Divide => divide(operands, options),
            Operator::Abs => {
                let inner = operands[0].render(options)?;
                Ok(Rendered::new(
                    format!("\\left|{} \\right|", inner),
                    Bodmas::Brackets,
                ))
            }
            Operator::Sqrt => {
                let inner = operands[0].render(options)?;
                Ok(Rendered::new(format!("\\sqrt{{ {} }}", inner), Bodmas::Brackets))
            }
        }
    }
}

fn delimited(
    order: Bodmas,
    delimiter: &str,
    operands: &[Operand],
    options: &mut RenderOptions<'_>,
) -> Result<Rendered, MathsError> {
    let parts = operands
        .iter()
        .map(|operand| operand.render_auto_brackets(order, options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Rendered::new(parts.join(delimiter), order))
}

fn multiply(operands: &[Operand], options: &mut RenderOptions<'_>) -> Result<Rendered, MathsError> {
    let mut explicit: Vec<String> = Vec::new();
    let mut implicit: Vec<String> = Vec::new();
    for operand in operands {
        let rendered = operand.render(options)?.to_string();
        if !operand.requires_brackets(Bodmas::Multiplication, false) {
            implicit.push(rendered);
        } else if !operand.requires_brackets(Bodmas::Multiplication, true) {
            explicit.push(rendered);
        } else {
            implicit.push(make_brackets(&rendered));
        }
    }

    let mut explicit_out = explicit.join(" \\times ");
    let implicit_out = implicit.concat();
    // (2 \times 3)xy but 2xy
    if !implicit.is_empty() && explicit.len() > 1 {
        explicit_out = make_brackets(&explicit_out);
    }
    Ok(Rendered::new(
        explicit_out + &implicit_out,
        Bodmas::Multiplication,
    ))
}

fn divide(operands: &[Operand], options: &mut RenderOptions<'_>) -> Result<Rendered, MathsError> {
    let value = if let [numerator, denominator] = operands {
        format!(
            "\\frac{{ {} }}{{ {} }}",
            numerator.render(options)?,
            denominator.render(options)?
        )
    } else {
        operands
            .iter()
            .map(|operand| operand.render_auto_brackets(Bodmas::Division, options))
            .collect::<Result<Vec<_>, _>>()?
            .join(" \\div ")
    };
    Ok(Rendered::new(value, Bodmas::Division))
}
