use ariadne::Fmt;
use dice_attrs::ErrorKind;
use dice_error::{ErrorKind, EXPR};
use dice_parser::parser::token::op::Op;
use num_rational::Rational64;

/// A value that must be a whole number was a fraction, or a power had no exact rational value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a whole number",
    labels = [format!("{} is not a whole number", value)],
    help = format!(
        "the final result must be a whole number, and a power {} with a fractional exponent must have an exact root",
        "a^(p/q)".fg(EXPR),
    ),
)]
pub struct NonIntegerResult {
    /// The offending value. For a power with no exact root, this is the exponent.
    pub value: Rational64,
}

/// The factorial operator was applied to a value outside of the supported range.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot take the factorial of {}", value),
    labels = ["this factorial"],
    help = "the factorial is only defined here for whole numbers from 0 to 9",
)]
pub struct FactorialRange {
    /// The operand of the factorial.
    pub value: Rational64,
}

/// The termial operator was applied to a negative or fractional value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot take the termial of {}", value),
    labels = ["this termial"],
    help = format!("the termial {} is only defined for whole numbers n >= 0", "n?".fg(EXPR)),
)]
pub struct InvalidTermial {
    /// The operand of the termial.
    pub value: Rational64,
}

/// Division by zero, either explicitly or by raising zero to a negative power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this operation divides by zero"],
)]
pub struct DivisionByZero;

/// An intermediate value was too large to represent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "overflow",
    labels = [format!("the result of this `{}` is too large", op)],
    help = "values are limited to 64-bit numerators and denominators",
)]
pub struct Overflow {
    /// The operator whose result overflowed.
    pub op: Op,
}
