pub mod error;
pub mod postfix;
pub mod shunt;
pub mod token;

/// The associativity of a binary or unary operation, expressed as the set of sides on which an
/// operand using an operator of the same precedence can appear without parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`. For unary
    /// operations, this means `a op op` is evaluated as `(a op) op` (the operators appear to the
    /// right of the operand).
    Left,

    /// The binary operation is right-associative.
    ///
    /// This means `a op b op c` is evaluated as `a op (b op c)`.
    Right,

    /// The binary operation is associative, so `(a op b) op c` and `a op (b op c)` are the same
    /// value, and either grouping can be written `a op b op c`.
    Both,
}

impl Associativity {
    /// Returns true if this associativity includes the given side.
    pub const fn allows(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Self::Both, _) | (Self::Left, Side::Left) | (Self::Right, Side::Right)
        )
    }
}

/// The position of an operand relative to its operator.
///
/// The single operand of a unary operator is on the [`Side::Left`], since unary operators are
/// written after their operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the side of the operand at the given index in an operand list.
    pub const fn of_index(index: usize) -> Self {
        if index == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of factorial (`!`) and termial (`?`).
    Postfix,
}
