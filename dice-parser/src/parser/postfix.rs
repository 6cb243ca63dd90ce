//! Postfix (Reverse Polish) sequences.
//!
//! A [`Postfix`] is the linear form every expression is stored and exchanged in. Operators follow
//! their operands, so no parentheses are needed: `(1+2)*3` is `12+3*`. Sequences are produced by
//! the [shunting-yard converter](super::shunt), or parsed from the compact strings produced by the
//! candidate generator, where every character is one atom.

use crate::parser::{
    error::{kind, Error},
    token::op::Op,
};
use std::{fmt::{Display, Formatter}, ops::Range, str::FromStr};

/// A numeral or an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Atom {
    /// A natural number.
    Num(u32),

    /// An operator, applied to the values before it.
    Op(Op),
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Op(op) => write!(f, "{}", op),
        }
    }
}

/// An [`Atom`] together with the region of source code it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The numeral or operator.
    pub atom: Atom,

    /// The region of the source code that this atom originated from.
    pub span: Range<usize>,
}

/// An ordered sequence of atoms in postfix order.
///
/// A sequence is _evaluable_ if every operator has at least as many values before it as it takes
/// operands, and exactly one value remains at the end. [`Postfix::replay`] checks both conditions
/// while walking the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    items: Vec<Item>,
}

impl Postfix {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom to the end of the sequence.
    pub fn push(&mut self, atom: Atom, span: Range<usize>) {
        self.items.push(Item { atom, span });
    }

    /// Returns the items of the sequence.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns an iterator over the atoms of the sequence.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.items.iter().map(|item| item.atom)
    }

    /// Returns the number of atoms in the sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence holds no atoms.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the span covering the whole sequence.
    pub fn span(&self) -> Range<usize> {
        let start = self.items.iter().map(|item| item.span.start).min().unwrap_or(0);
        let end = self.items.iter().map(|item| item.span.end).max().unwrap_or(0);
        start..end
    }

    /// Replays the sequence on a stack of values.
    ///
    /// Each numeral is turned into a value with `num`. Each operator pops as many values as it
    /// takes operands (in left-to-right order) and pushes the value returned by `apply`. The
    /// single value left at the end is returned.
    ///
    /// Fails with [`kind::InsufficientOperands`] if an operator does not have enough values
    /// before it, and with [`kind::InvalidExpression`] if the sequence does not end with exactly
    /// one value. Errors returned by `num` or `apply` are propagated immediately.
    pub fn replay<T, N, A>(&self, mut num: N, mut apply: A) -> Result<T, Error>
    where
        N: FnMut(u32, &Item) -> Result<T, Error>,
        A: FnMut(Op, Vec<T>, &Item) -> Result<T, Error>,
    {
        let mut stack = Vec::new();

        for item in &self.items {
            match item.atom {
                Atom::Num(n) => stack.push(num(n, item)?),
                Atom::Op(op) => {
                    if stack.len() < op.arity() {
                        return Err(Error::new(vec![item.span.clone()], kind::InsufficientOperands {
                            op,
                            expected: op.arity(),
                            found: stack.len(),
                        }));
                    }

                    let operands = stack.split_off(stack.len() - op.arity());
                    stack.push(apply(op, operands, item)?);
                },
            }
        }

        if stack.len() != 1 {
            return Err(Error::new(vec![self.span()], kind::InvalidExpression {
                remaining: stack.len(),
            }));
        }

        // the length check above guarantees the stack has exactly one value
        stack.pop().ok_or_else(|| Error::new(vec![self.span()], kind::InvalidExpression {
            remaining: 0,
        }))
    }
}

/// Parses a compact postfix string, where every character is one atom: a single digit, or one of
/// the operators `+ - * / ^ ! ?`.
impl FromStr for Postfix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut postfix = Self::new();
        for (i, c) in s.char_indices() {
            let span = i..i + c.len_utf8();
            if let Some(digit) = c.to_digit(10) {
                postfix.push(Atom::Num(digit), span);
            } else if let Some(op) = Op::from_char(c) {
                postfix.push(Atom::Op(op), span);
            } else {
                return Err(Error::new(vec![span], kind::InvalidToken {
                    lexeme: c.to_string(),
                }));
            }
        }
        Ok(postfix)
    }
}

/// Writes the compact postfix form, with no separators between atoms.
impl Display for Postfix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for item in &self.items {
            write!(f, "{}", item.atom)?;
        }
        Ok(())
    }
}
