//! Parenthesization policies.
//!
//! A policy looks at already-rendered operand strings and decides which of them must be wrapped
//! in parentheses before being joined by the enclosing operator. Decisions are made on the text
//! alone, by finding the operators that appear outside of any parentheses.

use crate::render::Mode;
use dice_parser::parser::{token::op::Op, Side};
use std::cmp::Ordering;

/// Returns the operators that appear at parenthesis depth zero in the string, from left to right.
fn depth_zero_ops(s: &str) -> impl Iterator<Item = Op> + '_ {
    let mut depth = 0usize;
    s.chars().filter_map(move |c| match c {
        '(' => {
            depth += 1;
            None
        },
        ')' => {
            depth = depth.saturating_sub(1);
            None
        },
        _ if depth == 0 => Op::from_char(c),
        _ => None,
    })
}

/// Returns the lowest-precedence operator at parenthesis depth zero in the string. If several
/// share the lowest precedence, the leftmost one is returned.
///
/// Returns [`None`] for atoms and fully parenthesized strings, which bind tighter than any
/// operator.
///
/// ```
/// use dice_compute::render::paren::top_level_op;
/// use dice_parser::parser::token::op::Op;
///
/// assert_eq!(top_level_op("(1+2)*3"), Some(Op::Mul));
/// assert_eq!(top_level_op("1*2-3+4"), Some(Op::Sub));
/// assert_eq!(top_level_op("(1+2)"), None);
/// ```
pub fn top_level_op(s: &str) -> Option<Op> {
    depth_zero_ops(s).fold(None, |lowest, op| match lowest {
        Some(lowest) if lowest.precedence() <= op.precedence() => Some(lowest),
        _ => Some(op),
    })
}

/// Wraps the string in parentheses.
pub fn wrap(s: &str) -> String {
    format!("({})", s)
}

/// Smart policy for one operand of a unary or binary operator.
fn smart(op: Op, operand: &str, side: Side) -> bool {
    let Some(top) = top_level_op(operand) else {
        return false;
    };

    match top.precedence().cmp(&op.precedence()) {
        Ordering::Less => true,
        Ordering::Equal if top == op => !top.allows(side),
        Ordering::Equal => !op.allows(side),
        Ordering::Greater => false,
    }
}

/// Smart policy for one operand of a flattened group. All siblings share the enclosing operator,
/// so only the precedence test applies.
fn smart_multi(op: Op, operand: &str) -> bool {
    top_level_op(operand).is_some_and(|top| top.precedence() < op.precedence())
}

/// Normal policy: wrap anything with an operator at depth zero, except chains of the enclosing
/// operator when it is `+` or `*`.
fn normal(op: Op, operand: &str) -> bool {
    let mut ops = depth_zero_ops(operand).peekable();
    if ops.peek().is_none() {
        return false;
    }

    !(op.is_commutative() && ops.all(|inner| inner == op))
}

/// Returns true if the operand at the given side of the operator must be parenthesized.
pub fn needs_parens(mode: Mode, op: Op, operand: &str, side: Side) -> bool {
    match mode {
        Mode::Smart => smart(op, operand, side),
        Mode::Full => true,
        Mode::Normal => normal(op, operand),
    }
}

/// Returns true if the operand of a flattened group of `op` must be parenthesized.
pub fn needs_parens_multi(mode: Mode, op: Op, operand: &str) -> bool {
    match mode {
        Mode::Smart => smart_multi(op, operand),
        Mode::Full => true,
        Mode::Normal => normal(op, operand),
    }
}

/// Applies the policy to the operands of a unary or binary operator, given in left-to-right
/// order, wrapping those that need it.
pub fn parenthesize(mode: Mode, op: Op, operands: Vec<String>) -> Vec<String> {
    operands.into_iter()
        .enumerate()
        .map(|(i, operand)| {
            if needs_parens(mode, op, &operand, Side::of_index(i)) {
                wrap(&operand)
            } else {
                operand
            }
        })
        .collect()
}

/// Applies the n-ary variant of the policy to the operands of a flattened `+` or `*` group.
pub fn parenthesize_multi(mode: Mode, op: Op, operands: Vec<String>) -> Vec<String> {
    operands.into_iter()
        .map(|operand| {
            if needs_parens_multi(mode, op, &operand) {
                wrap(&operand)
            } else {
                operand
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(operands: &[&str]) -> Vec<String> {
        operands.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn top_level() {
        assert_eq!(top_level_op("5"), None);
        assert_eq!(top_level_op("(1-2)"), None);
        assert_eq!(top_level_op("1+2*3"), Some(Op::Add));
        assert_eq!(top_level_op("2^3!"), Some(Op::Exp));
        assert_eq!(top_level_op("(1+1)?"), Some(Op::Termial));
        assert_eq!(top_level_op("(1+1)?!"), Some(Op::Termial));
        assert_eq!(top_level_op("3!/(4+5)"), Some(Op::Div));
    }

    #[test]
    fn smart_precedence() {
        assert_eq!(parenthesize(Mode::Smart, Op::Mul, strings(&["1+2", "3"])), strings(&["(1+2)", "3"]));
        assert_eq!(parenthesize(Mode::Smart, Op::Add, strings(&["1*2", "3^4"])), strings(&["1*2", "3^4"]));
        assert_eq!(parenthesize(Mode::Smart, Op::Factorial, strings(&["2^3"])), strings(&["(2^3)"]));
        assert_eq!(parenthesize(Mode::Smart, Op::Exp, strings(&["3!", "2"])), strings(&["3!", "2"]));
    }

    #[test]
    fn smart_same_operator() {
        assert_eq!(parenthesize(Mode::Smart, Op::Sub, strings(&["1-2", "3-4"])), strings(&["1-2", "(3-4)"]));
        assert_eq!(parenthesize(Mode::Smart, Op::Exp, strings(&["1^2", "3^4"])), strings(&["(1^2)", "3^4"]));
        assert_eq!(parenthesize(Mode::Smart, Op::Add, strings(&["1+2", "3+4"])), strings(&["1+2", "3+4"]));
        assert_eq!(parenthesize(Mode::Smart, Op::Factorial, strings(&["3!"])), strings(&["3!"]));
    }

    #[test]
    fn smart_mixed_operators() {
        assert_eq!(parenthesize(Mode::Smart, Op::Sub, strings(&["1+2", "3+4"])), strings(&["1+2", "(3+4)"]));
        assert_eq!(parenthesize(Mode::Smart, Op::Mul, strings(&["1/2", "3/4"])), strings(&["1/2", "3/4"]));
        assert_eq!(parenthesize(Mode::Smart, Op::Div, strings(&["1*2", "3*4"])), strings(&["1*2", "(3*4)"]));
        assert_eq!(parenthesize(Mode::Smart, Op::Factorial, strings(&["(1+1)?"])), strings(&["(1+1)?"]));
    }

    #[test]
    fn full() {
        assert_eq!(parenthesize(Mode::Full, Op::Add, strings(&["1", "2"])), strings(&["(1)", "(2)"]));
        assert_eq!(parenthesize_multi(Mode::Full, Op::Mul, strings(&["1", "2", "3"])), strings(&["(1)", "(2)", "(3)"]));
    }

    #[test]
    fn normal_keeps_chains() {
        assert_eq!(parenthesize(Mode::Normal, Op::Add, strings(&["1+2", "3"])), strings(&["1+2", "3"]));
        assert_eq!(parenthesize(Mode::Normal, Op::Mul, strings(&["(1+2)*3", "4"])), strings(&["(1+2)*3", "4"]));
        assert_eq!(parenthesize(Mode::Normal, Op::Add, strings(&["1*2", "3"])), strings(&["(1*2)", "3"]));
        assert_eq!(parenthesize(Mode::Normal, Op::Sub, strings(&["1-2", "3"])), strings(&["(1-2)", "3"]));
        assert_eq!(parenthesize(Mode::Normal, Op::Factorial, strings(&["3!"])), strings(&["(3!)"]));
    }

    #[test]
    fn multi_ignores_associativity() {
        assert_eq!(
            parenthesize_multi(Mode::Smart, Op::Add, strings(&["1", "4!", "4-5", "5*5"])),
            strings(&["1", "4!", "4-5", "5*5"]),
        );
        assert_eq!(
            parenthesize_multi(Mode::Smart, Op::Mul, strings(&["3", "1+2", "3/1^4"])),
            strings(&["3", "(1+2)", "3/1^4"]),
        );
    }
}
