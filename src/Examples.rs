//! examples of usage of complexity
/// rendering, complex algebra, random constants and the modulus quiz
pub mod maths_examples;
