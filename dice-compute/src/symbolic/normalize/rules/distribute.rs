//! Rules that move the right operand of `-` and `/` out of a nested operation of the same kind.

use crate::symbolic::{
    normalize::{rules::do_binary, step::Step},
    step_collector::StepCollector,
    Tree,
};
use dice_parser::parser::token::op::Op;
use log::trace;

/// Rewrites `a op (b op c)` to `a complement (c op b)`.
fn swap_nested(tree: &Tree, op: Op, complement: Op) -> Option<Tree> {
    do_binary(tree, op, |a, rhs| {
        do_binary(rhs, op, |b, c| {
            Some(Tree::Node(complement, vec![
                a.clone(),
                Tree::Node(op, vec![c.clone(), b.clone()]),
            ]))
        })
    })
}

/// `a-(b-c) = a+(c-b)`
pub fn distribute_sub(tree: &Tree, step_collector: &mut dyn StepCollector<Step>) -> Option<Tree> {
    let opt = swap_nested(tree, Op::Sub, Op::Add)?;
    trace!("distribute_sub: `{}` -> `{}`", tree, opt);
    step_collector.push(Step::DistributeSub);
    Some(opt)
}

/// `a/(b/c) = a*(c/b)`
pub fn distribute_div(tree: &Tree, step_collector: &mut dyn StepCollector<Step>) -> Option<Tree> {
    let opt = swap_nested(tree, Op::Div, Op::Mul)?;
    trace!("distribute_div: `{}` -> `{}`", tree, opt);
    step_collector.push(Step::DistributeDiv);
    Some(opt)
}

/// `a/b^(c-d) = a*b^(d-c)`
///
/// Only an exponent that is itself a subtraction is flipped; `a/b^c` is left alone.
pub fn distribute_div_exp(tree: &Tree, step_collector: &mut dyn StepCollector<Step>) -> Option<Tree> {
    let opt = do_binary(tree, Op::Div, |a, rhs| {
        do_binary(rhs, Op::Exp, |b, exp| {
            do_binary(exp, Op::Sub, |c, d| {
                Some(Tree::Node(Op::Mul, vec![
                    a.clone(),
                    Tree::Node(Op::Exp, vec![
                        b.clone(),
                        Tree::Node(Op::Sub, vec![d.clone(), c.clone()]),
                    ]),
                ]))
            })
        })
    })?;

    trace!("distribute_div_exp: `{}` -> `{}`", tree, opt);
    step_collector.push(Step::DistributeDivExp);
    Some(opt)
}

/// Applies the first distribution rule that matches.
pub fn all(tree: &Tree, step_collector: &mut dyn StepCollector<Step>) -> Option<Tree> {
    distribute_sub(tree, step_collector)
        .or_else(|| distribute_div(tree, step_collector))
        .or_else(|| distribute_div_exp(tree, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn apply(input: &str) -> Option<String> {
        let tree = Tree::parse(input).unwrap();
        all(&tree, &mut ()).map(|tree| tree.to_string())
    }

    #[test]
    fn sub() {
        assert_eq!(apply("1-(2-3)"), Some("1+3-2".to_string()));
        assert_eq!(apply("(1-2)-3"), None);
        assert_eq!(apply("1-(2+3)"), None);
    }

    #[test]
    fn div() {
        assert_eq!(apply("5/(6/3)"), Some("5*3/6".to_string()));
        assert_eq!(apply("(5/6)/3"), None);
        assert_eq!(apply("5/(6*3)"), None);
    }

    #[test]
    fn div_exp() {
        assert_eq!(apply("5/(2^(3-1))"), Some("5*2^(1-3)".to_string()));
        assert_eq!(apply("5/(2^3)"), None);
        assert_eq!(apply("5/(2^(3+1))"), None);
        assert_eq!(apply("5-(2^(3-1))"), None);
    }

    #[test]
    fn only_at_root() {
        assert_eq!(apply("4*(1-(2-3))"), None);
    }

    #[test]
    fn collects_steps() {
        let tree = Tree::parse("5/(6/3)").unwrap();
        let mut steps = Vec::new();
        distribute_div(&tree, &mut steps).unwrap();
        assert_eq!(steps, vec![Step::DistributeDiv]);
        assert!(distribute_sub(&tree, &mut steps).is_none());
        assert_eq!(steps, vec![Step::DistributeDiv]);
    }
}
