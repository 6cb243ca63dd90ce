//! Rules for `+` and `*` chains, whose operands can be freely regrouped and reordered.

use crate::symbolic::{
    normalize::{rules::do_commutative, step::Step},
    step_collector::StepCollector,
    Tree,
};
use log::trace;

/// The key operands are ordered by: the number of tokens in the operand, then the tokens
/// themselves, compared as strings.
pub fn sort_key(tree: &Tree) -> (usize, Vec<String>) {
    let leaves = tree.leaves();
    (leaves.len(), leaves)
}

/// `a+(b+c) = a+b+c`
/// `a*(b*c) = a*b*c`
pub fn merge_nested(tree: &Tree, step_collector: &mut dyn StepCollector<Step>) -> Option<Tree> {
    let opt = do_commutative(tree, |op, operands| {
        if operands.iter().all(|operand| operand.op() != Some(op)) {
            return None;
        }
        Some(Tree::merged(op, operands.to_vec()))
    })?;

    trace!("merge_nested: `{}`", opt);
    step_collector.push(Step::MergeNested);
    Some(opt)
}

/// `b+a = a+b`
/// `b*a = a*b`
///
/// Operands are stably sorted by [`sort_key`], so the rule applies only if they are not already
/// in order.
pub fn sort_commute(tree: &Tree, step_collector: &mut dyn StepCollector<Step>) -> Option<Tree> {
    let opt = do_commutative(tree, |op, operands| {
        let mut keyed = operands.iter()
            .map(|operand| (sort_key(operand), operand))
            .collect::<Vec<_>>();
        if keyed.windows(2).all(|pair| pair[0].0 <= pair[1].0) {
            return None;
        }

        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        Some(Tree::Node(op, keyed.into_iter().map(|(_, operand)| operand.clone()).collect()))
    })?;

    trace!("sort_commute: `{}` -> `{}`", tree, opt);
    step_collector.push(Step::SortCommute);
    Some(opt)
}
