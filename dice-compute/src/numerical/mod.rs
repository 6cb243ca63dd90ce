//! Numerical evaluation of expressions.
//!
//! Values are exact fractions ([`num_rational::Rational64`]) with checked arithmetic, so
//! expressions such as `7/2*2` evaluate exactly, and overflow is reported as an error instead of
//! wrapping around.

pub mod error;
pub mod eval;

pub use eval::{eval, eval_infix, eval_recorded, Eval};
