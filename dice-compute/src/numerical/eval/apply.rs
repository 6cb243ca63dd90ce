//! Semantics of each operator over exact rational values.

use crate::numerical::error::{kind, Error};
use dice_parser::parser::{error::kind::InsufficientOperands, token::op::Op};
use num_rational::Rational64;
use num_traits::{checked_pow, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};
use std::ops::Range;

/// Applies the operator to its operands, given in left-to-right order.
///
/// `spans` are attached to any error that occurs; they point at the operator in the source
/// expression, if there is one.
pub(crate) fn apply(op: Op, operands: &[Rational64], spans: &[Range<usize>]) -> Result<Rational64, Error> {
    let overflow = || Error::new(spans.to_vec(), kind::Overflow { op });
    match (op, operands) {
        (Op::Add, [a, b]) => a.checked_add(b).ok_or_else(overflow),
        (Op::Sub, [a, b]) => a.checked_sub(b).ok_or_else(overflow),
        (Op::Mul, [a, b]) => a.checked_mul(b).ok_or_else(overflow),
        (Op::Div, [a, b]) => {
            if b.is_zero() {
                return Err(Error::new(spans.to_vec(), kind::DivisionByZero));
            }
            a.checked_div(b).ok_or_else(overflow)
        },
        (Op::Exp, [a, b]) => pow(*a, *b, spans),
        (Op::Factorial, [n]) => factorial(*n, spans),
        (Op::Termial, [n]) => termial(*n, spans),
        _ => Err(Error::new(spans.to_vec(), InsufficientOperands {
            op,
            expected: op.arity(),
            found: operands.len(),
        })),
    }
}

/// `base^exp` for a rational exponent `p/q` in lowest terms: the exact `q`-th root of the base,
/// raised to `p`. A negative exponent takes the reciprocal of the base.
///
/// Fails with [`kind::NonIntegerResult`] if the numerator or denominator of the base is not a
/// perfect `q`-th power, since the result would not be rational.
fn pow(base: Rational64, exp: Rational64, spans: &[Range<usize>]) -> Result<Rational64, Error> {
    let base = if *exp.numer() < 0 {
        if base.is_zero() {
            return Err(Error::new(spans.to_vec(), kind::DivisionByZero));
        }
        base.recip()
    } else {
        base
    };

    let root = match (exact_root(*base.numer(), *exp.denom()), exact_root(*base.denom(), *exp.denom())) {
        (Some(numer), Some(denom)) => Rational64::new(numer, denom),
        _ => return Err(Error::new(spans.to_vec(), kind::NonIntegerResult { value: exp })),
    };

    let overflow = || Error::new(spans.to_vec(), kind::Overflow { op: Op::Exp });
    let power = usize::try_from(exp.numer().unsigned_abs()).map_err(|_| overflow())?;
    checked_pow(root, power).ok_or_else(overflow)
}

/// Returns the integer `q`-th root of `n`, if `n` is a perfect `q`-th power. Negative numbers
/// only have odd roots.
fn exact_root(n: i64, q: i64) -> Option<i64> {
    if n < 0 {
        return if q % 2 == 1 {
            exact_root(n.checked_neg()?, q).map(|root| -root)
        } else {
            None
        };
    }

    // degrees past u32::MAX only have the roots 0 and 1, which u32::MAX finds as well
    let degree = u32::try_from(q).unwrap_or(u32::MAX);
    let (mut lo, mut hi) = (0, n);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match mid.checked_pow(degree) {
            Some(power) if power == n => return Some(mid),
            Some(power) if power < n => lo = mid + 1,
            _ => hi = mid - 1,
        }
    }
    None
}

/// `n!`, for whole numbers `n` from 0 to 9.
fn factorial(n: Rational64, spans: &[Range<usize>]) -> Result<Rational64, Error> {
    match n.is_integer().then(|| n.to_integer()) {
        Some(k @ 0..=9) => Ok(Rational64::from_integer((1..=k).product())),
        _ => Err(Error::new(spans.to_vec(), kind::FactorialRange { value: n })),
    }
}

/// `n? = n + (n - 1) + ... + 1`, for whole numbers `n >= 0`.
fn termial(n: Rational64, spans: &[Range<usize>]) -> Result<Rational64, Error> {
    match n.is_integer().then(|| n.to_integer()) {
        Some(k) if k >= 0 => k.checked_add(1)
            .and_then(|next| k.checked_mul(next))
            .map(|product| Rational64::from_integer(product / 2))
            .ok_or_else(|| Error::new(spans.to_vec(), kind::Overflow { op: Op::Termial })),
        _ => Err(Error::new(spans.to_vec(), kind::InvalidTermial { value: n })),
    }
}
