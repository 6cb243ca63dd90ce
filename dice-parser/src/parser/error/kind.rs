use ariadne::Fmt;
use dice_attrs::ErrorKind;
use dice_error::{ErrorKind, EXPR};
use crate::parser::token::op::Op;

/// A token that is neither a numeral, an operator nor a parenthesis was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid token `{}`", lexeme),
    labels = ["this token"],
    help = format!(
        "expressions may only contain natural numbers, parentheses, and the operators {}",
        "+ - * / ^ ! ?".fg(EXPR),
    ),
)]
pub struct InvalidToken {
    /// The lexeme of the offending token.
    pub lexeme: String,
}

/// A parenthesis was not closed, or a closing parenthesis had no matching opening parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "mismatched parentheses",
    labels = ["this parenthesis has no partner"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct MismatchedParentheses {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// An operator was applied with fewer operands available than it needs.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("not enough operands for the `{}` operator", op),
    labels = ["this operator"],
    help = format!(
        "`{}` takes {} operand(s), but only {} {} available here",
        op.fg(EXPR),
        expected,
        found,
        if *found == 1 { "is" } else { "are" },
    ),
)]
pub struct InsufficientOperands {
    /// The operator that was applied.
    pub op: Op,

    /// The number of operands the operator takes.
    pub expected: usize,

    /// The number of operands that were available.
    pub found: usize,
}

/// The expression did not reduce to exactly one value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid expression",
    labels = [if *remaining == 0 {
        "there is nothing to evaluate here".to_string()
    } else {
        format!("this leaves {} values without an operator to combine them", remaining)
    }],
    help = "every number must be combined with the others using an operator",
)]
pub struct InvalidExpression {
    /// The number of values left over at the end of the expression.
    pub remaining: usize,
}

/// A parenthesized group did not have the shape of a single operation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed group",
    labels = ["this group"],
    help = "each group must hold one number, one unary operation, one binary operation, or a chain of `+` or `*`",
)]
pub struct MalformedGroup;
