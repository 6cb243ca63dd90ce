#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite applied while normalizing an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `a-(b-c) = a+(c-b)`
    DistributeSub,

    /// `a/(b/c) = a*(c/b)`
    DistributeDiv,

    /// `a/b^(c-d) = a*b^(d-c)`
    DistributeDivExp,

    /// `a+(b+c) = a+b+c`, and likewise for `*`
    MergeNested,

    /// `b+a = a+b`, when `a` orders before `b`
    SortCommute,
}
