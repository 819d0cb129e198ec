use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Utils::config::Settings;
use crate::maths::complex::{ComplexNumber, compute_divide, compute_modulus, compute_product};
use crate::maths::errors::MathsError;
use crate::maths::expression::Expression;
use crate::maths::operands::{Constant, MathsOperand, Operand, RandomConstant, RenderOptions, Variable};
use crate::maths::operators::Operator;
use crate::quiz::QuizError;
use crate::quiz::the_modulus::MultiplyQuestion;

fn seeded_rng(settings: &Settings) -> StdRng {
    match settings.quiz.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn rendering() -> Result<(), MathsError> {
    let x = Variable::new("x");
    let y = Variable::new("y");
    // implicit products: constants are bracketed, letters are juxtaposed
    let e = Expression::from_operands([
        Operand::from(Constant::new(2)),
        Constant::new(3).into(),
        x.clone().into(),
        y.clone().into(),
    ])?;
    println!("2 * 3 * x * y:      {}", e.to_latex()?);

    let sum = Expression::new([x.clone(), y.clone()], Operator::Add)?;
    let sqrt = Expression::unary(sum.clone(), Operator::Sqrt)?;
    let e = Expression::from_operands([Operand::from(Constant::new(4)), sqrt.into()])?;
    println!("4 * sqrt(x + y):    {}", e.to_latex()?);

    let difference = Expression::new([y.clone(), Variable::new("z")], Operator::Subtract)?;
    let e = Expression::new([Operand::from(x.clone()), difference.into()], Operator::Add)?;
    println!("x + (y - z):        {}", e.to_latex()?);

    let frac = Expression::new([sum.clone(), Expression::unary(x, Operator::Abs)?], Operator::Divide)?;
    println!("(x + y) / |x|:      {}", frac.to_latex()?);
    Ok(())
}

fn complex_algebra() -> Result<(), MathsError> {
    let z = ComplexNumber::from_parts(3, 2)?;
    let w = ComplexNumber::from_parts(1, -2)?;
    println!("z = {},  w = {}", z.to_latex()?, w.to_latex()?);
    println!("|z|   = {}", compute_modulus(&z)?.to_latex()?);
    println!("zw    = {}", compute_product(&[z.clone(), w.clone()])?.to_latex()?);
    println!("z / w = {}", compute_divide(&z, &w)?.to_latex()?);
    // a complex number is itself an operand
    let twice = Expression::from_operands([Operand::from(Constant::new(2)), z.into()])?;
    println!("2z    = {}", twice.to_latex()?);
    Ok(())
}

fn random_constants(rng: &mut StdRng) -> Result<(), MathsError> {
    let a = RandomConstant::new(1, 11);
    let b = RandomConstant::with_step(-10, 11, 5);
    let e = Expression::new([a.clone(), b.clone()], Operator::Add)?;
    let mut options = RenderOptions::with_random(&mut *rng);
    println!("a + b = {}", e.render(&mut options)?);
    // cached until reset
    println!("a + b = {}", e.render(&mut options)?);
    a.reset();
    b.reset();
    println!("a + b = {} (after reset)", e.render(&mut options)?);
    Ok(())
}

fn modulus_question(settings: &Settings, rng: &mut StdRng) -> Result<(), QuizError> {
    let mut question = MultiplyQuestion::new(rng, &settings.quiz)?;
    let asked = question.ask(rng)?;
    println!("z = {},  w = {}", asked.data.z, asked.data.w);
    for part in &asked.parts {
        println!("{}", part.question);
        for (i, answer) in part.answers.iter().enumerate() {
            let mark = if i == part.correct_index { "*" } else { " " };
            println!("  {} [{}] {}", mark, i, answer);
        }
    }
    let picks: Vec<usize> = asked.parts.iter().map(|p| p.correct_index).collect();
    println!("score: {}", question.answer(&picks)?);

    println!("which identity always holds?");
    for candidate in question.pattern(rng)? {
        println!("  {} {}", candidate, question.check_pattern(&candidate)?);
    }
    Ok(())
}

pub fn maths_examples(example: usize, settings: &Settings) {
    let mut rng = seeded_rng(settings);
    let result = match example {
        0 => rendering().map_err(QuizError::from),
        1 => complex_algebra().map_err(QuizError::from),
        2 => random_constants(&mut rng).map_err(QuizError::from),
        3 => modulus_question(settings, &mut rng),
        _ => {
            error!("no example {}, choose 0 to 3", example);
            Ok(())
        }
    };
    if let Err(err) = result {
        error!("example {} failed: {}", example, err);
    }
}
