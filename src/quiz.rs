//! Quiz questions built on the maths engine.
//!
//! A question draws random complex numbers, renders question/answer text through the maths
//! module and grades the indices a player picks. Scoring across several questions, sessions
//! and storage belong to the surrounding application.
use std::fmt;

use crate::maths::errors::MathsError;

/// "The Modulus": |zw| = |z||w|
///# Example
/// ```
/// use complexity::quiz::the_modulus::MultiplyQuestion;
/// use complexity::Utils::config::QuizSettings;
/// use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(5);
/// let mut question = MultiplyQuestion::new(&mut rng, &QuizSettings::default()).unwrap();
/// let asked = question.ask(&mut rng).unwrap();
/// let picks: Vec<usize> = asked.parts.iter().map(|p| p.correct_index).collect();
/// assert_eq!(question.answer(&picks).unwrap(), 15);
/// ```
pub mod the_modulus;

/// Error types for asking and grading questions
#[derive(Debug, Clone, PartialEq)]
pub enum QuizError {
    Maths(MathsError),
    AlreadyAnswered,
    NotAsked,
    MissingAnswer { expected: usize, found: usize },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuizError::Maths(err) => write!(f, "Maths error: {}", err),
            QuizError::AlreadyAnswered => write!(f, "Question has already been answered"),
            QuizError::NotAsked => write!(f, "Question has not been asked yet"),
            QuizError::MissingAnswer { expected, found } => write!(
                f,
                "Expected an answer for each of {} parts, got {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Maths(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MathsError> for QuizError {
    fn from(err: MathsError) -> Self {
        QuizError::Maths(err)
    }
}
