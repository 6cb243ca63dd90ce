//! Implementation of the normalization rules.
//!
//! Each rule in this module is a function that takes the tree to rewrite as an argument, and
//! returns `Some(tree)` with the rewritten tree if the rule applies, or `None` if the rule does
//! not apply. Rules only look at the root of the tree; the passes in
//! [`normalize`](super) decide where in the tree they are applied.

pub mod commute;
pub mod distribute;

use crate::symbolic::Tree;
use dice_parser::parser::token::op::Op;

/// If the tree is a binary node of the given operator, calls the given transformation function
/// with its left and right operands.
///
/// Returns `Some(tree)` with the transformed tree if a transformation was applied.
pub(crate) fn do_binary(
    tree: &Tree,
    op: Op,
    f: impl FnOnce(&Tree, &Tree) -> Option<Tree>,
) -> Option<Tree> {
    match tree {
        Tree::Node(node_op, operands) if *node_op == op => match operands.as_slice() {
            [lhs, rhs] => f(lhs, rhs),
            _ => None,
        },
        _ => None,
    }
}

/// If the tree is a `+` or `*` node, calls the given transformation function with the operator
/// and the operands.
///
/// Returns `Some(tree)` with the transformed tree if a transformation was applied.
pub(crate) fn do_commutative(
    tree: &Tree,
    f: impl FnOnce(Op, &[Tree]) -> Option<Tree>,
) -> Option<Tree> {
    match tree {
        Tree::Node(op, operands) if op.is_commutative() => f(*op, operands),
        _ => None,
    }
}
