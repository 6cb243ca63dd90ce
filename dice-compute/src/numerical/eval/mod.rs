mod apply;

use crate::{
    numerical::error::{kind::NonIntegerResult, Error},
    symbolic::Tree,
};
use dice_parser::parser::{postfix::{Atom, Postfix}, shunt::shunt};
use num_rational::Rational64;
use std::ops::Range;

pub(crate) use apply::apply;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluates the expression exactly. Intermediate values may be fractions.
    fn eval_exact(&self) -> Result<Rational64, Error>;

    /// Evaluates the expression, requiring the result to be a whole number.
    fn eval(&self) -> Result<i64, Error>;
}

/// Returns the value as a whole number, or a [`NonIntegerResult`] error pointing at the given
/// spans.
fn whole(value: Rational64, spans: Vec<Range<usize>>) -> Result<i64, Error> {
    if value.is_integer() {
        Ok(value.to_integer())
    } else {
        Err(Error::new(spans, NonIntegerResult { value }))
    }
}

impl Eval for Postfix {
    fn eval_exact(&self) -> Result<Rational64, Error> {
        self.replay(
            |n, _| Ok(Rational64::from_integer(i64::from(n))),
            |op, operands, item| apply(op, &operands, &[item.span.clone()]),
        )
    }

    fn eval(&self) -> Result<i64, Error> {
        whole(self.eval_exact()?, vec![self.span()])
    }
}

/// Trees carry no source spans, so errors produced while evaluating them have none either.
///
/// Flattened `+` and `*` nodes are evaluated from left to right.
impl Eval for Tree {
    fn eval_exact(&self) -> Result<Rational64, Error> {
        match self {
            Tree::Leaf(n) => Ok(Rational64::from_integer(i64::from(*n))),
            Tree::Node(op, operands) => {
                let values = operands.iter()
                    .map(Eval::eval_exact)
                    .collect::<Result<Vec<_>, _>>()?;

                if op.is_unary() {
                    return apply(*op, &values, &[]);
                }

                let mut values = values.into_iter();
                let first = values.next().unwrap_or_default();
                values.try_fold(first, |acc, value| apply(*op, &[acc, value], &[]))
            },
        }
    }

    fn eval(&self) -> Result<i64, Error> {
        whole(self.eval_exact()?, Vec::new())
    }
}

/// Evaluates a postfix sequence, producing a whole number.
///
/// Intermediate values are exact fractions, so `7/2*2` evaluates to `7`, but the final value and
/// the operands of `!` and `?` must be whole numbers. A fractional exponent takes an exact root,
/// so `8^(2/3)` evaluates to `4`.
///
/// ```
/// use dice_compute::numerical::eval::eval;
///
/// let postfix = "12+3^".parse().unwrap();
/// assert_eq!(eval(&postfix).unwrap(), 27);
/// ```
pub fn eval(postfix: &Postfix) -> Result<i64, Error> {
    postfix.eval()
}

/// Evaluates a postfix sequence like [`eval`], also returning a record of the stack: the value
/// pushed by each atom, in order.
///
/// ```
/// use dice_compute::numerical::eval::eval_recorded;
/// use num_rational::Rational64;
///
/// let postfix = "32/4*".parse().unwrap();
/// let (value, record) = eval_recorded(&postfix).unwrap();
/// assert_eq!(value, 6);
/// assert_eq!(record, [
///     Rational64::from_integer(3),
///     Rational64::from_integer(2),
///     Rational64::new(3, 2),
///     Rational64::from_integer(4),
///     Rational64::from_integer(6),
/// ]);
/// ```
pub fn eval_recorded(postfix: &Postfix) -> Result<(i64, Vec<Rational64>), Error> {
    let mut results = Vec::new();
    let value = postfix.replay(
        |n, _| Ok(Rational64::from_integer(i64::from(n))),
        |op, operands, item| {
            let result = apply(op, &operands, &[item.span.clone()])?;
            results.push(result);
            Ok(result)
        },
    )?;

    let mut results = results.into_iter();
    let record = postfix.atoms()
        .filter_map(|atom| match atom {
            Atom::Num(n) => Some(Rational64::from_integer(i64::from(n))),
            Atom::Op(_) => results.next(),
        })
        .collect();
    Ok((whole(value, vec![postfix.span()])?, record))
}

/// Shunts the infix expression to postfix, then evaluates it.
///
/// ```
/// use dice_compute::numerical::eval::eval_infix;
///
/// assert_eq!(eval_infix("5+4-3?").unwrap(), 3);
/// ```
pub fn eval_infix(input: &str) -> Result<i64, Error> {
    eval(&shunt(input)?)
}
