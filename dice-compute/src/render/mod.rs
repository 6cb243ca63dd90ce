//! Rendering of postfix sequences to infix notation.
//!
//! Rendering replays the postfix sequence on a stack of strings. Each operator pops its operands,
//! lets the active [`Mode`] decide which of them to parenthesize (see [`paren`]), and joins them
//! back together.
//!
//! ```
//! use dice_compute::render::{to_infix, Mode};
//!
//! let postfix = "123--".parse().unwrap();
//! assert_eq!(to_infix(&postfix, Mode::Smart).unwrap(), "1-(2-3)");
//! assert_eq!(to_infix(&postfix, Mode::Full).unwrap(), "((1)-((2)-(3)))");
//! ```

pub mod paren;

use dice_error::Error;
use dice_parser::parser::{postfix::Postfix, token::op::Op};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The parenthesization policy to render with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Add only the parentheses required to preserve the structure of the expression.
    #[default]
    Smart,

    /// Parenthesize every operand, and the whole expression.
    Full,

    /// Parenthesize every operand containing an operator, except chains of `+` or `*` inside the
    /// same operator. The output is the form read back by [`Tree::parse`].
    ///
    /// [`Tree::parse`]: crate::symbolic::Tree::parse
    Normal,
}

/// Joins already-parenthesized operands with the operator: `a+b+c` for binary operators, `a!` for
/// unary ones.
pub fn join(op: Op, operands: &[String]) -> String {
    if op.is_unary() {
        format!("{}{}", operands.concat(), op)
    } else {
        operands.join(op.to_string().as_str())
    }
}

/// Renders the postfix sequence in infix notation with the given mode.
///
/// Fails if the sequence is not evaluable: an operator without enough operands, or leftover
/// values at the end.
pub fn to_infix(postfix: &Postfix, mode: Mode) -> Result<String, Error> {
    let rendered = postfix.replay(
        |n, _| Ok(n.to_string()),
        |op, operands, _| Ok(join(op, &paren::parenthesize(mode, op, operands))),
    )?;

    Ok(match mode {
        Mode::Full => paren::wrap(&rendered),
        Mode::Smart | Mode::Normal => rendered,
    })
}

#[cfg(test)]
mod tests {
    use dice_parser::parser::{error::kind::InsufficientOperands, shunt::shunt};
    use super::*;

    /// Renders the compact postfix string with the given mode.
    fn render(postfix: &str, mode: Mode) -> String {
        to_infix(&postfix.parse().unwrap(), mode).unwrap()
    }

    #[test]
    fn smart() {
        assert_eq!(render("54+3?-", Mode::Smart), "5+4-3?");
        assert_eq!(render("12-3-", Mode::Smart), "1-2-3");
        assert_eq!(render("123--", Mode::Smart), "1-(2-3)");
        assert_eq!(render("232^^", Mode::Smart), "2^3^2");
        assert_eq!(render("23^2^", Mode::Smart), "(2^3)^2");
        assert_eq!(render("12+3*", Mode::Smart), "(1+2)*3");
        assert_eq!(render("123/*", Mode::Smart), "1*2/3");
        assert_eq!(render("123*/", Mode::Smart), "1/(2*3)");
        assert_eq!(render("11+?!", Mode::Smart), "(1+1)?!");
        assert_eq!(render("23^!", Mode::Smart), "(2^3)!");
        assert_eq!(render("3!!", Mode::Smart), "3!!");
        assert_eq!(render("3!2^", Mode::Smart), "3!^2");
    }

    #[test]
    fn normal() {
        assert_eq!(render("123++", Mode::Normal), "1+2+3");
        assert_eq!(render("12-3-", Mode::Normal), "(1-2)-3");
        assert_eq!(render("12*3+", Mode::Normal), "(1*2)+3");
        assert_eq!(render("12+3*4*", Mode::Normal), "(1+2)*3*4");
        assert_eq!(render("3!!", Mode::Normal), "(3!)!");
        assert_eq!(render("5", Mode::Normal), "5");
    }

    #[test]
    fn full() {
        assert_eq!(render("12+3*", Mode::Full), "(((1)+(2))*(3))");
        assert_eq!(render("3!", Mode::Full), "((3)!)");
        assert_eq!(render("5", Mode::Full), "(5)");
    }

    #[test]
    fn multi_digit_numerals() {
        let postfix = shunt("12*(34-5)").unwrap();
        assert_eq!(to_infix(&postfix, Mode::Smart).unwrap(), "12*(34-5)");
    }

    #[test]
    fn not_evaluable() {
        let err = to_infix(&"1+".parse().unwrap(), Mode::Smart).unwrap_err();
        assert!(err.is::<InsufficientOperands>());
    }
}
