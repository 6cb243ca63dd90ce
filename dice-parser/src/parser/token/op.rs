//! The operators of the Math Dice language, and the constant tables that describe them.

use crate::parser::{Associativity, Precedence, Side};
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An operator that can appear in a Math Dice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op {
    /// Addition, `a+b`.
    Add,

    /// Subtraction, `a-b`.
    Sub,

    /// Multiplication, `a*b`.
    Mul,

    /// Division, `a/b`.
    Div,

    /// Exponentiation, `a^b`.
    Exp,

    /// Factorial, `a!`.
    Factorial,

    /// Termial, `a?`, the sum of all integers from 1 to `a`.
    Termial,
}

impl Op {
    /// Every operator, in the order they are declared.
    pub const ALL: [Op; 7] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Exp,
        Op::Factorial,
        Op::Termial,
    ];

    /// Returns the operator written with the given character, if any.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            '!' => Some(Self::Factorial),
            '?' => Some(Self::Termial),
            _ => None,
        }
    }

    /// Returns the character used to write the operator.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
            Self::Factorial => '!',
            Self::Termial => '?',
        }
    }

    /// Returns the precedence of the operator.
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Exp => Precedence::Exp,
            Self::Factorial | Self::Termial => Precedence::Postfix,
        }
    }

    /// Returns the associativity of the operator.
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Add | Self::Mul => Associativity::Both,
            Self::Sub | Self::Div | Self::Factorial | Self::Termial => Associativity::Left,
            Self::Exp => Associativity::Right,
        }
    }

    /// Returns true if an operand on the given side of this operator may be another use of an
    /// operator with the same precedence without being parenthesized.
    pub const fn allows(self, side: Side) -> bool {
        self.associativity().allows(side)
    }

    /// Returns the number of operands the operator takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Factorial | Self::Termial => 1,
            _ => 2,
        }
    }

    /// Returns true if the operator takes a single operand.
    pub const fn is_unary(self) -> bool {
        self.arity() == 1
    }

    /// Returns true if the operands of the operator can be freely reordered and regrouped (`+` and
    /// `*`).
    pub const fn is_commutative(self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }

    /// Returns the elegance penalty of a single use of the operator.
    ///
    /// `^`, `!` and `?` are considered inelegant; the other operators are free.
    pub const fn penalty(self) -> u32 {
        match self {
            Self::Exp => 2,
            Self::Factorial => 5,
            Self::Termial => 11,
            _ => 0,
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in Op::ALL {
            assert_eq!(Op::from_char(op.symbol()), Some(op));
        }
        assert_eq!(Op::from_char('%'), None);
        assert_eq!(Op::from_char('('), None);
    }

    #[test]
    fn precedence_order() {
        assert!(Op::Add.precedence() == Op::Sub.precedence());
        assert!(Op::Add.precedence() < Op::Mul.precedence());
        assert!(Op::Div.precedence() < Op::Exp.precedence());
        assert!(Op::Exp.precedence() < Op::Factorial.precedence());
        assert!(Op::Factorial.precedence() == Op::Termial.precedence());
    }

    #[test]
    fn associativity_sides() {
        assert!(Op::Add.allows(Side::Left) && Op::Add.allows(Side::Right));
        assert!(Op::Sub.allows(Side::Left) && !Op::Sub.allows(Side::Right));
        assert!(!Op::Exp.allows(Side::Left) && Op::Exp.allows(Side::Right));
        assert!(Op::Termial.allows(Side::Left) && !Op::Termial.allows(Side::Right));
    }

    #[test]
    fn penalties() {
        let total: u32 = Op::ALL.iter().map(|op| op.penalty()).sum();
        assert_eq!(total, 18);
    }
}
