//! Normalization of expressions to a canonical form.
//!
//! Two expressions that differ only in the order of the operands of `+` and `*`, or in how a
//! nested `-` or `/` is grouped, normalize to the same canonical string. Normalization runs three
//! bottom-up passes over the [`Tree`] of the expression, each returning a fresh tree:
//!
//! 1. [`distribute`]: rewrites `a-(b-c)` to `a+(c-b)`, `a/(b/c)` to `a*(c/b)`, and `a/b^(c-d)`
//!    to `a*b^(d-c)` (see [`rules::distribute`]).
//! 2. [`flatten`]: merges the `+` and `*` chains that distribution may have created.
//! 3. [`sort_commute`]: orders the operands of every `+` and `*` node by
//!    [`sort_key`](rules::commute::sort_key).
//!
//! The result is rendered with the smart [`Mode`].
//!
//! ```
//! use dice_compute::symbolic::normalize::normalize_infix;
//!
//! assert_eq!(normalize_infix("5/(((1^4)/3)/3)").unwrap(), "3*5*3/1^4");
//! assert_eq!(normalize_infix("3*2+1").unwrap(), "1+2*3");
//! ```

pub mod rules;
pub mod step;

use crate::{
    render::Mode,
    symbolic::{step_collector::StepCollector, Tree},
};
use dice_error::Error;
use dice_parser::parser::{postfix::Postfix, shunt::shunt};
use log::debug;

pub use step::Step;

/// Rebuilds a node with each of its operands rewritten by `f`. Leaves are returned as is.
fn map_operands(tree: Tree, mut f: impl FnMut(Tree) -> Tree) -> Tree {
    match tree {
        Tree::Leaf(_) => tree,
        Tree::Node(op, operands) => Tree::Node(op, operands.into_iter().map(&mut f).collect()),
    }
}

/// Applies the distribution rules top-down: first at the root, then within the operands of the
/// (possibly rewritten) root.
pub fn distribute(tree: Tree, step_collector: &mut dyn StepCollector<Step>) -> Tree {
    let tree = rules::distribute::all(&tree, step_collector).unwrap_or(tree);
    map_operands(tree, |operand| distribute(operand, step_collector))
}

/// Merges nested `+` and `*` chains, bottom-up.
pub fn flatten(tree: Tree, step_collector: &mut dyn StepCollector<Step>) -> Tree {
    let tree = map_operands(tree, |operand| flatten(operand, step_collector));
    rules::commute::merge_nested(&tree, step_collector).unwrap_or(tree)
}

/// Sorts the operands of every `+` and `*` node, bottom-up.
pub fn sort_commute(tree: Tree, step_collector: &mut dyn StepCollector<Step>) -> Tree {
    let tree = map_operands(tree, |operand| sort_commute(operand, step_collector));
    rules::commute::sort_commute(&tree, step_collector).unwrap_or(tree)
}

/// Runs every pass on the tree.
///
/// Normalizing a tree that is already normalized returns it unchanged.
pub fn normalize_tree(tree: Tree, step_collector: &mut dyn StepCollector<Step>) -> Tree {
    let tree = distribute(tree, step_collector);
    let tree = flatten(tree, step_collector);
    sort_commute(tree, step_collector)
}

/// Normalizes the postfix sequence and returns the canonical string.
///
/// Fails if the sequence is not evaluable. The value of the expression is not checked; evaluate
/// it first if that matters.
pub fn normalize(postfix: &Postfix) -> Result<String, Error> {
    normalize_with(postfix, &mut ())
}

/// Normalizes the postfix sequence, pushing every rewrite that is applied to the given
/// [`StepCollector`].
pub fn normalize_with(
    postfix: &Postfix,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<String, Error> {
    let tree = Tree::from_postfix(postfix)?;
    let canonical = normalize_tree(tree, step_collector).render(Mode::Smart);
    debug!("normalized `{}` to `{}`", postfix, canonical);
    Ok(canonical)
}

/// Normalizes the postfix sequence, and returns the canonical string along with the rewrites that
/// were applied, in order.
pub fn normalize_with_steps(postfix: &Postfix) -> Result<(String, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let canonical = normalize_with(postfix, &mut steps)?;
    Ok((canonical, steps))
}

/// Shunts the infix expression to postfix, then normalizes it.
pub fn normalize_infix(input: &str) -> Result<String, Error> {
    normalize(&shunt(input)?)
}
