//! Elegance scoring of rendered expressions.
//!
//! Among expressions that reach the same total, those using fewer of the "unusual" operators are
//! considered more elegant. A score is a penalty: lower is better.

use dice_parser::parser::token::op::Op;

/// A type that assigns an elegance penalty to an infix expression.
///
/// [`Scorer`] is implemented for any `Fn(&str) -> u32`, so a closure can be used wherever a scorer
/// is expected.
pub trait Scorer {
    /// Returns the penalty of the expression.
    fn score(&self, expr: &str) -> u32;
}

impl<F> Scorer for F
where
    F: Fn(&str) -> u32,
{
    #[inline]
    fn score(&self, expr: &str) -> u32 {
        self(expr)
    }
}

/// The default scorer: the sum of the [penalties](Op::penalty) of every operator character in the
/// expression. Numerals and parentheses are free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Penalty;

impl Scorer for Penalty {
    fn score(&self, expr: &str) -> u32 {
        expr.chars()
            .filter_map(Op::from_char)
            .map(Op::penalty)
            .sum()
    }
}

/// Scores the expression with the default [`Penalty`] scorer.
///
/// ```
/// use dice_compute::score::score;
///
/// assert_eq!(score("2^3!4?5"), 18);
/// assert_eq!(score("(1+2)*3"), 0);
/// ```
pub fn score(expr: &str) -> u32 {
    Penalty.score(expr)
}
