//! Conversion of infix expressions to [`Postfix`] sequences, using the shunting-yard algorithm.

use crate::{
    parser::{
        error::{kind, Error},
        postfix::{Atom, Postfix},
        token::op::Op,
        Side,
    },
    tokenizer::{tokenize_complete, Token, TokenKind},
};
use std::ops::Range;

/// An entry on the operator stack.
#[derive(Debug)]
enum Pending {
    /// An operator waiting for its right operand to be output.
    Op(Op, Range<usize>),

    /// An opening parenthesis waiting for its partner.
    Open(Range<usize>),
}

/// Returns true if the operator `top` on the stack must be output before `incoming` is pushed.
fn pops_before(top: Op, incoming: Op) -> bool {
    top.precedence() > incoming.precedence()
        || (top.precedence() == incoming.precedence() && incoming.allows(Side::Left))
}

fn invalid_token(token: &Token) -> Error {
    Error::new(vec![token.span.clone()], kind::InvalidToken {
        lexeme: token.lexeme.to_string(),
    })
}

/// Tokenizes the given infix expression and converts it to postfix.
///
/// ```
/// use dice_parser::parser::shunt::shunt;
///
/// assert_eq!(shunt("5 + 4 - 3?").unwrap().to_string(), "54+3?-");
/// assert_eq!(shunt("2^3^2").unwrap().to_string(), "232^^");
/// ```
pub fn shunt(input: &str) -> Result<Postfix, Error> {
    shunt_tokens(&tokenize_complete(input))
}

/// Converts a stream of infix tokens to postfix. Whitespace tokens are skipped.
///
/// The conversion fails on the first token that cannot be placed: an unknown symbol or a numeral
/// too large to represent ([`kind::InvalidToken`]), or a parenthesis with no partner
/// ([`kind::MismatchedParentheses`]). The result is not checked for evaluability; operator arity
/// is checked when the sequence is replayed.
pub fn shunt_tokens(tokens: &[Token]) -> Result<Postfix, Error> {
    let mut output = Postfix::new();
    let mut stack = Vec::new();

    for token in tokens.iter().filter(|token| !token.is_whitespace()) {
        match token.kind {
            TokenKind::Int => {
                let n = token.lexeme.parse::<u32>()
                    .map_err(|_| invalid_token(token))?;
                output.push(Atom::Num(n), token.span.clone());
            },
            TokenKind::OpenParen => stack.push(Pending::Open(token.span.clone())),
            TokenKind::CloseParen => loop {
                match stack.pop() {
                    Some(Pending::Op(op, span)) => output.push(Atom::Op(op), span),
                    Some(Pending::Open(_)) => break,
                    None => return Err(Error::new(vec![token.span.clone()], kind::MismatchedParentheses {
                        opening: false,
                    })),
                }
            },
            kind => {
                let op = kind.as_op().ok_or_else(|| invalid_token(token))?;
                while let Some(&Pending::Op(top, _)) = stack.last() {
                    if !pops_before(top, op) {
                        break;
                    }
                    if let Some(Pending::Op(top, span)) = stack.pop() {
                        output.push(Atom::Op(top), span);
                    }
                }
                stack.push(Pending::Op(op, token.span.clone()));
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op, span) => output.push(Atom::Op(op), span),
            Pending::Open(span) => return Err(Error::new(vec![span], kind::MismatchedParentheses {
                opening: true,
            })),
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Shunts the input and returns the compact postfix string.
    fn compact(input: &str) -> String {
        shunt(input).unwrap().to_string()
    }

    #[test]
    fn precedence() {
        assert_eq!(compact("1+2*3"), "123*+");
        assert_eq!(compact("1*2+3"), "12*3+");
        assert_eq!(compact("1+2^3*4"), "123^4*+");
    }

    #[test]
    fn left_associative() {
        assert_eq!(compact("5-4-3"), "54-3-");
        assert_eq!(compact("8/4/2"), "84/2/");
        assert_eq!(compact("1+2+3"), "12+3+");
    }

    #[test]
    fn right_associative() {
        assert_eq!(compact("2^3^2"), "232^^");
    }

    #[test]
    fn unary_operators() {
        assert_eq!(compact("3!!"), "3!!");
        assert_eq!(compact("2^3!"), "23!^");
        assert_eq!(compact("3!^2"), "3!2^");
        assert_eq!(compact("5+4-3?"), "54+3?-");
    }

    #[test]
    fn parentheses() {
        assert_eq!(compact("(1+2)*3"), "12+3*");
        assert_eq!(compact("5/(((1^4)/3)/3)"), "514^3/3//");
        assert_eq!(compact("(1+1)?!??/((1+1)?!+1)"), "11+?!??11+?!1+/");
    }

    #[test]
    fn multi_digit_and_whitespace() {
        let postfix = shunt("12 + 345").unwrap();
        assert_eq!(postfix.atoms().collect::<Vec<_>>(), vec![
            Atom::Num(12),
            Atom::Num(345),
            Atom::Op(Op::Add),
        ]);
        assert_eq!(postfix.items()[1].span, 5..8);
        assert_eq!(postfix.items()[2].span, 3..4);
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = shunt("(1+3").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::MismatchedParentheses>(), Some(&kind::MismatchedParentheses {
            opening: true,
        }));
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn unopened_parenthesis() {
        let err = shunt("1+3)*2").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::MismatchedParentheses>(), Some(&kind::MismatchedParentheses {
            opening: false,
        }));
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn invalid_symbol() {
        let err = shunt("1+x").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::InvalidToken>(), Some(&kind::InvalidToken {
            lexeme: "x".to_string(),
        }));
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn numeral_too_large() {
        let err = shunt("99999999999+1").unwrap_err();
        assert!(err.is::<kind::InvalidToken>());
        assert_eq!(err.spans, vec![0..11]);
    }

    #[test]
    fn arity_not_checked() {
        assert_eq!(compact("1+"), "1+");
        assert_eq!(compact(""), "");
    }
}
