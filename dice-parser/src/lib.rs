//! Tokenizer and parser for Math Dice expressions.
//!
//! Expressions are written over natural numbers and the operators `+ - * / ^ ! ?`, where `!` is
//! the factorial and `?` the termial (`n? = n + (n - 1) + ... + 1`). This crate turns text into
//! the linear [`Postfix`](parser::postfix::Postfix) form that every other part of the engine
//! consumes:
//!
//! ```
//! use dice_parser::parser::shunt::shunt;
//!
//! let postfix = shunt("(1+2)^3!").unwrap();
//! assert_eq!(postfix.to_string(), "12+3!^");
//! ```

pub mod parser;
pub mod tokenizer;
