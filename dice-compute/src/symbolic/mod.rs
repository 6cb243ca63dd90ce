//! Structural manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a [`Tree`]. It carries the same information as
//! the [`Postfix`](dice_parser::parser::postfix::Postfix) sequence it was built from, with the
//! main difference being that [`Tree`] nodes **flatten** out chains of `+` and `*`.
//!
//! For example, the expression `1 + (2 + 3)` is a single `+` node with _three_ operands, where
//! as its postfix sequence `123++` applies `+` twice. Flattening makes reordering the operands
//! of a chain a matter of sorting one list.
//!
//! # Normalization
//!
//! Many dice rolls can reach the same total in ways that only differ by the order of a sum, or
//! by how a nested subtraction is grouped. The [`normalize()`] function reduces an expression to
//! a canonical string, so that such variants compare equal, and [`humanize()`] uses it to group a
//! whole batch of candidates into [`EquivalenceClass`]es.
//!
//! ```
//! use dice_compute::symbolic::normalize_infix;
//!
//! assert_eq!(normalize_infix("(1+1)?!??/((1+1)?!+1)").unwrap(), "(1+1)?!??/(1+(1+1)?!)");
//! ```
//!
//! For more information, see the [`mod@normalize`] module.

pub mod humanize;
pub mod normalize;
pub mod step_collector;
pub mod tree;

pub use humanize::{humanize, humanize_with, EquivalenceClass};
pub use normalize::{normalize, normalize_infix, normalize_with, normalize_with_steps, Step};
pub use step_collector::StepCollector;
pub use tree::Tree;
