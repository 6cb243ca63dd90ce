//! The parse tree of an expression.
//!
//! Unlike a [`Postfix`] sequence, a [`Tree`] makes the structure of the expression explicit, and
//! **flattens** chains of `+` and `*`: `1+(2+3)` is a single [`Tree::Node`] with _three_
//! operands, `1`, `2` and `3`. Every other operator has exactly as many operands as its arity.
//!
//! This is the structure the normal [`Mode`] writes out: the normal rendering of a postfix
//! sequence can be read back with [`Tree::parse`] into the same tree that [`Tree::from_postfix`]
//! builds directly.
//!
//! ```
//! use dice_compute::{render::{to_infix, Mode}, symbolic::Tree};
//! use dice_parser::parser::token::op::Op;
//!
//! let postfix = "123++".parse().unwrap();
//! let tree = Tree::from_postfix(&postfix).unwrap();
//! assert_eq!(tree, Tree::Node(Op::Add, vec![Tree::Leaf(1), Tree::Leaf(2), Tree::Leaf(3)]));
//!
//! let normal = to_infix(&postfix, Mode::Normal).unwrap();
//! assert_eq!(normal, "1+2+3");
//! assert_eq!(Tree::parse(&normal).unwrap(), tree);
//! ```

mod parse;

use crate::render::{join, paren, Mode};
use dice_error::Error;
use dice_parser::parser::{postfix::Postfix, token::op::Op};
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node in the parse tree of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tree {
    /// A natural number.
    Leaf(u32),

    /// An operator applied to its operands, in left-to-right order.
    Node(Op, Vec<Tree>),
}

impl Tree {
    /// Builds a node, splicing in the operands of any operand that is itself a node of the same
    /// operator, if the operator is `+` or `*`.
    ///
    /// `1+(2+3)` becomes `1+2+3`, while `1-(2-3)` is left as is.
    pub fn merged(op: Op, operands: Vec<Tree>) -> Self {
        if !op.is_commutative() {
            return Tree::Node(op, operands);
        }

        let mut merged = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Tree::Node(inner, children) if inner == op => merged.extend(children),
                operand => merged.push(operand),
            }
        }
        Tree::Node(op, merged)
    }

    /// Builds the tree of a postfix sequence. Chains of `+` and `*` are flattened as they are
    /// built.
    ///
    /// Fails if the sequence is not evaluable.
    pub fn from_postfix(postfix: &Postfix) -> Result<Self, Error> {
        postfix.replay(
            |n, _| Ok(Tree::Leaf(n)),
            |op, operands, _| Ok(Tree::merged(op, operands)),
        )
    }

    /// Parses a string in the format written by the normal [`Mode`].
    ///
    /// Parentheses delimit groups. Within a group, unary operators apply to the operand directly
    /// before them, and the remaining operands must be joined by a single binary operator, which
    /// may only repeat if it is `+` or `*`. Any other group, such as `1-2-3` or `1+2*3`, is a
    /// [`MalformedGroup`](dice_parser::parser::error::kind::MalformedGroup).
    pub fn parse(input: &str) -> Result<Self, Error> {
        parse::parse(input)
    }

    /// Returns a copy of the tree where every `+` and `*` node has absorbed its operands of the
    /// same operator, at every depth.
    pub fn flatten(self) -> Self {
        match self {
            Tree::Leaf(_) => self,
            Tree::Node(op, operands) => Tree::merged(
                op,
                operands.into_iter().map(Tree::flatten).collect(),
            ),
        }
    }

    /// Returns the operator of the root node, if the tree is not a leaf.
    pub fn op(&self) -> Option<Op> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Node(op, _) => Some(*op),
        }
    }

    /// Returns the operands of the root node. A leaf has none.
    pub fn operands(&self) -> &[Tree] {
        match self {
            Tree::Leaf(_) => &[],
            Tree::Node(_, operands) => operands,
        }
    }

    /// Returns the tokens of the tree in written order, without parentheses: numerals and operator
    /// symbols.
    ///
    /// ```
    /// use dice_compute::symbolic::Tree;
    ///
    /// let tree = Tree::parse("(1+1)?*3").unwrap();
    /// assert_eq!(tree.leaves(), ["1", "+", "1", "?", "*", "3"]);
    /// ```
    pub fn leaves(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.push_leaves(&mut leaves);
        leaves
    }

    fn push_leaves(&self, leaves: &mut Vec<String>) {
        match self {
            Tree::Leaf(n) => leaves.push(n.to_string()),
            Tree::Node(op, operands) if op.is_unary() => {
                for operand in operands {
                    operand.push_leaves(leaves);
                }
                leaves.push(op.to_string());
            },
            Tree::Node(op, operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        leaves.push(op.to_string());
                    }
                    operand.push_leaves(leaves);
                }
            },
        }
    }

    /// Renders the tree in infix notation, bottom-up.
    ///
    /// Flattened nodes with more than two operands use the n-ary variant of the policy. Unlike
    /// [`to_infix`](crate::render::to_infix), [`Mode::Full`] does not wrap the whole expression.
    pub fn render(&self, mode: Mode) -> String {
        match self {
            Tree::Leaf(n) => n.to_string(),
            Tree::Node(op, operands) => {
                let rendered = operands.iter()
                    .map(|operand| operand.render(mode))
                    .collect::<Vec<_>>();
                let wrapped = if operands.len() > 2 {
                    paren::parenthesize_multi(mode, *op, rendered)
                } else {
                    paren::parenthesize(mode, *op, rendered)
                };
                join(*op, &wrapped)
            },
        }
    }

}

/// Renders the tree with the smart [`Mode`].
impl Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(Mode::Smart))
    }
}

#[cfg(test)]
mod tests {
    use dice_parser::parser::error::kind::{InvalidToken, MalformedGroup, MismatchedParentheses};
    use pretty_assertions::assert_eq;
    use crate::render::to_infix;
    use super::*;

    fn leaf(n: u32) -> Tree {
        Tree::Leaf(n)
    }

    fn node<const N: usize>(op: Op, operands: [Tree; N]) -> Tree {
        Tree::Node(op, operands.to_vec())
    }

    #[test]
    fn from_postfix_merges_chains() {
        let tree = Tree::from_postfix(&"12+34+*5*".parse().unwrap()).unwrap();
        assert_eq!(tree, node(Op::Mul, [
            node(Op::Add, [leaf(1), leaf(2)]),
            node(Op::Add, [leaf(3), leaf(4)]),
            leaf(5),
        ]));
    }

    #[test]
    fn from_postfix_keeps_non_commutative() {
        let tree = Tree::from_postfix(&"123--".parse().unwrap()).unwrap();
        assert_eq!(tree, node(Op::Sub, [leaf(1), node(Op::Sub, [leaf(2), leaf(3)])]));
    }

    #[test]
    fn parse_groups() {
        assert_eq!(Tree::parse("5").unwrap(), leaf(5));
        assert_eq!(Tree::parse("(3!)!").unwrap(), node(Op::Factorial, [node(Op::Factorial, [leaf(3)])]));
        assert_eq!(Tree::parse("(1+1)?").unwrap(), node(Op::Termial, [node(Op::Add, [leaf(1), leaf(1)])]));
        assert_eq!(Tree::parse("(1-2)-3").unwrap(), node(Op::Sub, [node(Op::Sub, [leaf(1), leaf(2)]), leaf(3)]));
        assert_eq!(Tree::parse("1+2+34").unwrap(), node(Op::Add, [leaf(1), leaf(2), leaf(34)]));
        assert_eq!(Tree::parse("((7))").unwrap(), leaf(7));
    }

    #[test]
    fn parse_malformed() {
        for input in ["1-2-3", "1+2*3", "()", "1+", "+1", "!3", "1 2"] {
            let err = Tree::parse(input).unwrap_err();
            assert!(err.is::<MalformedGroup>(), "{}", input);
        }

        let err = Tree::parse("2*(1-)").unwrap_err();
        assert_eq!(err.spans, vec![2..6]);
    }

    #[test]
    fn parse_mismatched() {
        let err = Tree::parse("(1+2").unwrap_err();
        assert_eq!(err.downcast_ref::<MismatchedParentheses>(), Some(&MismatchedParentheses {
            opening: true,
        }));
        assert_eq!(err.spans, vec![0..1]);

        let err = Tree::parse("1+2)").unwrap_err();
        assert_eq!(err.downcast_ref::<MismatchedParentheses>(), Some(&MismatchedParentheses {
            opening: false,
        }));
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn parse_invalid_token() {
        assert!(Tree::parse("1+x").unwrap_err().is::<InvalidToken>());
    }

    #[test]
    fn parse_reads_normal_mode() {
        for postfix in ["11+?!??11+?!1+/", "145-+4!+55*+4?/", "514^3/3//", "11+?11+?!?*1-", "12+3+4+"] {
            let postfix = postfix.parse().unwrap();
            let normal = to_infix(&postfix, Mode::Normal).unwrap();
            assert_eq!(Tree::parse(&normal).unwrap(), Tree::from_postfix(&postfix).unwrap(), "{}", normal);
        }
    }

    #[test]
    fn flatten_nested() {
        let tree = node(Op::Add, [
            leaf(1),
            node(Op::Add, [leaf(2), node(Op::Add, [leaf(3), leaf(4)])]),
            node(Op::Mul, [node(Op::Mul, [leaf(5), leaf(6)]), leaf(7)]),
        ]);
        assert_eq!(tree.flatten(), node(Op::Add, [
            leaf(1),
            leaf(2),
            leaf(3),
            leaf(4),
            node(Op::Mul, [leaf(5), leaf(6), leaf(7)]),
        ]));
    }

    #[test]
    fn leaves_of_unary() {
        let tree = Tree::parse("((1+1)?!)?").unwrap();
        assert_eq!(tree.leaves(), ["1", "+", "1", "?", "!", "?"]);
    }

    #[test]
    fn render_modes() {
        let tree = Tree::parse("(1+4!+(4-5)+(5*5))/(4?)").unwrap();
        assert_eq!(tree.render(Mode::Smart), "(1+4!+4-5+5*5)/4?");
        assert_eq!(tree.render(Mode::Normal), "(1+(4!)+(4-5)+(5*5))/(4?)");
        assert_eq!(tree.to_string(), "(1+4!+4-5+5*5)/4?");
    }
}
