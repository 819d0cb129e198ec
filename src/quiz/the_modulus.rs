use log::{info, warn};
use rand::RngCore;
use rand::seq::SliceRandom;

use crate::Utils::config::QuizSettings;
use crate::maths::complex::{ComplexNumber, compute_modulus, compute_product};
use crate::maths::errors::MathsError;
use crate::maths::expression::Expression;
use crate::maths::operands::{
    Constant, MathsOperand, Operand, RandomConstant, RenderOptions, Variable, draw_index,
};
use crate::maths::operators::Operator;
use crate::maths::value::Value;
use crate::quiz::QuizError;

pub const POINTS_PER_PART: u32 = 5;
/// plausible wrong answers offered next to the correct one
pub const WRONG_ANSWERS: usize = 2;

/// A question text and its answers, the correct one first
#[derive(Clone, Debug)]
pub struct QuestionPart {
    question: Operand,
    answers: Vec<Operand>,
}

impl QuestionPart {
    fn render(&self, options: &mut RenderOptions<'_>) -> Result<(String, Vec<String>), QuizError> {
        let question = self.question.render(options)?.to_string();
        let answers = self
            .answers
            .iter()
            .map(|answer| answer.render(options).map(|v| v.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((question, answers))
    }
}

/// Rendered part as shown to the player
#[derive(Clone, Debug, PartialEq)]
pub struct AskedPart {
    pub question: String,
    pub answers: Vec<String>,
    pub correct_index: usize,
}

/// The numbers the question is about
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionData {
    pub z: String,
    pub w: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Asked {
    pub data: QuestionData,
    pub parts: Vec<AskedPart>,
}

/// Multiple choice question on the product of two random complex numbers z and w:
/// 1. what is zw
/// 2. what is |zw|
/// 3. what is |z||w|
///
/// Spotting that the last two answers agree is the point of the quiz (see `pattern`).
pub struct MultiplyQuestion {
    z: ComplexNumber,
    w: ComplexNumber,
    zw: ComplexNumber,
    parts: Vec<QuestionPart>,
    asked: Option<Vec<AskedPart>>,
    answered: bool,
    score: u32,
}

fn z_var() -> Variable {
    Variable::new("z")
}

fn w_var() -> Variable {
    Variable::new("w")
}

fn zw_var() -> Result<Expression, QuizError> {
    Ok(Expression::from_operands([z_var(), w_var()])?)
}

fn abs(operand: impl Into<Operand>) -> Result<Expression, QuizError> {
    Ok(Expression::unary(operand, Operator::Abs)?)
}

/// value under the root of a modulus expression
fn squared_modulus(z: &ComplexNumber) -> Result<Value, QuizError> {
    let modulus = compute_modulus(z)?;
    Ok(modulus.operands()[0].render(&mut RenderOptions::new())?)
}

/// Roots of random integers in the neighbourhood of `squared`: the step is a tenth of the
/// value and the range spans ten steps either side.
fn wrong_roots(squared: &Value) -> Result<Vec<Operand>, QuizError> {
    let centre = squared
        .as_f64()
        .ok_or_else(|| MathsError::NonNumeric(squared.to_string()))?;
    let mut step = (centre * 0.1) as i64;
    if step < 1 {
        warn!("wrong answers around {} use step 1 instead of {}", centre, step);
        step = 1;
    }
    let start = (centre - (step * 10) as f64) as i64;
    let end = (centre + (step * 10) as f64) as i64;
    (0..WRONG_ANSWERS)
        .map(|_| -> Result<Operand, QuizError> {
            let root =
                Expression::unary(RandomConstant::with_step(start, end, step), Operator::Sqrt)?;
            Ok(root.into())
        })
        .collect()
}

fn equal(lhs: &Expression, rhs: &Expression) -> Result<String, QuizError> {
    Ok(format!("{} = {}", lhs.to_latex()?, rhs.to_latex()?))
}

impl MultiplyQuestion {
    /// Draws z and w with parts in `[settings.min_part, settings.max_part)`.
    pub fn new(rng: &mut dyn RngCore, settings: &QuizSettings) -> Result<Self, QuizError> {
        let mut options = RenderOptions::with_random(rng);
        let part = || RandomConstant::new(settings.min_part, settings.max_part);
        let z = ComplexNumber::with_options(part(), part(), &mut options)?;
        let w = ComplexNumber::with_options(part(), part(), &mut options)?;
        let zw = compute_product(&[z.clone(), w.clone()])?;
        info!(
            "multiply question: z = {}, w = {}, zw = {}",
            z.to_latex()?,
            w.to_latex()?,
            zw.to_latex()?
        );

        let parts = vec![
            Self::part_one(&zw)?,
            Self::part_two(&zw)?,
            Self::part_three(&z, &w)?,
        ];
        Ok(MultiplyQuestion {
            z,
            w,
            zw,
            parts,
            asked: None,
            answered: false,
            score: 0,
        })
    }

    fn part_one(zw: &ComplexNumber) -> Result<QuestionPart, QuizError> {
        Ok(QuestionPart {
            question: zw_var()?.into(),
            answers: vec![zw.clone().into(), Constant::new(1).into(), Constant::new(2).into()],
        })
    }

    fn part_two(zw: &ComplexNumber) -> Result<QuestionPart, QuizError> {
        let zw_mod = compute_modulus(zw)?;
        let mut answers: Vec<Operand> = vec![zw_mod.into()];
        answers.extend(wrong_roots(&squared_modulus(zw)?)?);
        Ok(QuestionPart {
            question: abs(zw_var()?)?.into(),
            answers,
        })
    }

    fn part_three(z: &ComplexNumber, w: &ComplexNumber) -> Result<QuestionPart, QuizError> {
        // |z||w| = sqrt[(a*a + b*b)(c*c + d*d)]
        let product = squared_modulus(z)?.try_mul(&squared_modulus(w)?)?;
        let z_mod_w_mod = Expression::unary(Constant::new(product.clone()), Operator::Sqrt)?;
        let mut answers: Vec<Operand> = vec![z_mod_w_mod.into()];
        answers.extend(wrong_roots(&product)?);
        Ok(QuestionPart {
            question: Expression::from_operands([abs(z_var())?, abs(w_var())?])?.into(),
            answers,
        })
    }

    pub fn z(&self) -> &ComplexNumber {
        &self.z
    }

    pub fn w(&self) -> &ComplexNumber {
        &self.w
    }

    pub fn zw(&self) -> &ComplexNumber {
        &self.zw
    }

    pub fn parts(&self) -> &[QuestionPart] {
        &self.parts
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn data(&self) -> Result<QuestionData, QuizError> {
        Ok(QuestionData {
            z: self.z.to_latex()?,
            w: self.w.to_latex()?,
        })
    }

    /// Renders the parts (once; later calls return the same text) and places each correct
    /// answer at a random index.
    pub fn ask(&mut self, rng: &mut dyn RngCore) -> Result<Asked, QuizError> {
        let parts = match self.asked.take() {
            Some(parts) => parts,
            None => self.render_parts(rng)?,
        };
        self.asked = Some(parts.clone());
        Ok(Asked {
            data: self.data()?,
            parts,
        })
    }

    fn render_parts(&self, rng: &mut dyn RngCore) -> Result<Vec<AskedPart>, QuizError> {
        let mut rendered = Vec::with_capacity(self.parts.len());
        {
            let mut options = RenderOptions::with_random(&mut *rng);
            for part in &self.parts {
                rendered.push(part.render(&mut options)?);
            }
        }
        let asked = rendered
            .into_iter()
            .map(|(question, mut answers)| {
                let correct = answers.remove(0);
                let correct_index = draw_index(&mut *rng, answers.len() as u64 + 1) as usize;
                answers.insert(correct_index, correct);
                AskedPart {
                    question,
                    answers,
                    correct_index,
                }
            })
            .collect();
        Ok(asked)
    }

    /// Grades one picked index per part, `POINTS_PER_PART` for each correct pick.
    pub fn answer(&mut self, choices: &[usize]) -> Result<u32, QuizError> {
        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }
        let asked = self.asked.as_ref().ok_or(QuizError::NotAsked)?;
        if choices.len() < asked.len() {
            return Err(QuizError::MissingAnswer {
                expected: asked.len(),
                found: choices.len(),
            });
        }
        let correct = asked
            .iter()
            .zip(choices)
            .filter(|(part, choice)| part.correct_index == **choice)
            .count() as u32;
        self.score += correct * POINTS_PER_PART;
        self.answered = true;
        info!("question answered: {} of {} parts correct", correct, asked.len());
        Ok(self.score)
    }

    fn patterns() -> Result<(String, Vec<String>), QuizError> {
        let z_mod = abs(z_var())?;
        let w_mod = abs(w_var())?;
        let zw_mod = abs(zw_var()?)?;
        let z_mod_w_mod = Expression::from_operands([z_mod.clone(), w_mod.clone()])?;
        let correct = equal(&zw_mod, &z_mod_w_mod)?;
        let wrong = vec![equal(&z_mod, &w_mod)?, equal(&z_mod, &zw_mod)?];
        Ok((correct, wrong))
    }

    /// Candidate identities, shuffled; exactly one holds for all z and w.
    pub fn pattern(&self, rng: &mut dyn RngCore) -> Result<Vec<String>, QuizError> {
        let (correct, mut answers) = Self::patterns()?;
        answers.push(correct);
        answers.shuffle(rng);
        Ok(answers)
    }

    pub fn check_pattern(&self, answer: &str) -> Result<bool, QuizError> {
        let (correct, _) = Self::patterns()?;
        Ok(correct == answer)
    }
}
