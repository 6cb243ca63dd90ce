//! Reading trees back from normal-mode infix strings.

use super::Tree;
use dice_error::Error;
use dice_parser::{
    parser::{
        error::kind::{InvalidToken, MalformedGroup, MismatchedParentheses},
        token::op::Op,
    },
    tokenizer::{tokenize_complete, TokenKind},
};
use std::ops::Range;

/// An element of a group, before the group is assembled into a tree.
#[derive(Debug)]
enum Entry {
    Operand(Tree),
    Operator(Op),
}

/// The entries of one level of parentheses.
#[derive(Debug, Default)]
struct Group {
    /// Span of the opening parenthesis, or [`None`] for the outermost level.
    open: Option<Range<usize>>,
    entries: Vec<Entry>,
}

impl Group {
    fn new(open: Range<usize>) -> Self {
        Self { open: Some(open), entries: Vec::new() }
    }

    /// Assembles the group into a single tree. `span` covers the whole group.
    ///
    /// Unary operators apply to the operand directly before them. What remains must be a single
    /// operand, or operands separated by one repeated binary operator, which may only repeat if it
    /// is `+` or `*`.
    fn build(self, span: Range<usize>) -> Result<Tree, Error> {
        let malformed = || Error::new(vec![span.clone()], MalformedGroup);
        let mut operands = Vec::new();
        let mut ops = Vec::new();
        let mut expect_operand = true;

        for entry in self.entries {
            match entry {
                Entry::Operand(tree) if expect_operand => {
                    operands.push(tree);
                    expect_operand = false;
                },
                Entry::Operator(op) if !expect_operand && op.is_unary() => {
                    let operand = operands.pop().ok_or_else(malformed)?;
                    operands.push(Tree::Node(op, vec![operand]));
                },
                Entry::Operator(op) if !expect_operand => {
                    ops.push(op);
                    expect_operand = true;
                },
                _ => return Err(malformed()),
            }
        }

        if expect_operand {
            return Err(malformed());
        }

        match ops.first() {
            None => operands.pop().ok_or_else(malformed),
            Some(&op) => {
                let repeated = ops.iter().all(|&other| other == op);
                if !repeated || (ops.len() > 1 && !op.is_commutative()) {
                    return Err(malformed());
                }
                Ok(Tree::Node(op, operands))
            },
        }
    }
}

/// Parses a normal-mode infix string into a tree. See [`Tree::parse`].
pub(super) fn parse(input: &str) -> Result<Tree, Error> {
    let mut current = Group::default();
    let mut enclosing = Vec::new();

    for token in tokenize_complete(input).iter().filter(|token| !token.is_whitespace()) {
        match token.kind {
            TokenKind::Int => {
                let n = token.lexeme.parse::<u32>()
                    .map_err(|_| Error::new(vec![token.span.clone()], InvalidToken {
                        lexeme: token.lexeme.to_string(),
                    }))?;
                current.entries.push(Entry::Operand(Tree::Leaf(n)));
            },
            TokenKind::OpenParen => {
                let inner = Group::new(token.span.clone());
                enclosing.push(std::mem::replace(&mut current, inner));
            },
            TokenKind::CloseParen => {
                let Some(parent) = enclosing.pop() else {
                    return Err(Error::new(vec![token.span.clone()], MismatchedParentheses {
                        opening: false,
                    }));
                };
                let group = std::mem::replace(&mut current, parent);
                let start = group.open.as_ref().map_or(0, |open| open.start);
                let tree = group.build(start..token.span.end)?;
                current.entries.push(Entry::Operand(tree));
            },
            kind => {
                let op = kind.as_op()
                    .ok_or_else(|| Error::new(vec![token.span.clone()], InvalidToken {
                        lexeme: token.lexeme.to_string(),
                    }))?;
                current.entries.push(Entry::Operator(op));
            },
        }
    }

    if !enclosing.is_empty() {
        let open = current.open.unwrap_or(0..0);
        return Err(Error::new(vec![open], MismatchedParentheses { opening: true }));
    }

    current.build(0..input.len())
}
