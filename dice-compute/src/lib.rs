//! Evaluation, rendering and canonicalization of Math Dice expressions.
//!
//! Math Dice expressions combine natural numbers (usually dice rolls) with the operators
//! `+ - * / ^ ! ?`. This crate works on the [`Postfix`](dice_parser::parser::postfix::Postfix)
//! sequences produced by [`dice_parser`]:
//!
//! - [`numerical`]: exact evaluation.
//! - [`render`]: infix rendering, with [smart, full, or normal](render::Mode) parenthesization.
//! - [`symbolic`]: parse trees, normalization to a canonical form, and grouping of equivalent
//!   expressions.
//! - [`score`]: the elegance penalty used to rank expressions.
//!
//! ```
//! use dice_compute::{numerical::eval_infix, symbolic::normalize_infix};
//!
//! assert_eq!(eval_infix("5+4-3?").unwrap(), 3);
//! assert_eq!(normalize_infix("5+4-3?").unwrap(), "4+5-3?");
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for the public data types of this crate.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod numerical;
pub mod render;
pub mod score;
pub mod symbolic;
