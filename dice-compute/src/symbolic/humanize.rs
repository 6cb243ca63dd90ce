//! Grouping of candidate expressions into equivalence classes.
//!
//! Given a batch of candidate expressions (typically every way a set of dice can reach a target
//! total), [`humanize`] collapses them into one [`EquivalenceClass`] per canonical form, so that
//! each genuinely different solution is shown once, along with the ways it can be written.

use crate::{
    render::{to_infix, Mode},
    score::Scorer,
    symbolic::normalize::normalize,
};
use dice_error::Error;
use dice_parser::parser::postfix::Postfix;
use log::debug;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A canonical expression, and every distinct way it was written in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquivalenceClass {
    /// The canonical form shared by every member of the class.
    pub canonical: String,

    /// The score of the class.
    pub score: u32,

    /// The smart renderings of the members that differ from the canonical form, sorted and
    /// deduplicated.
    pub equivalents: Vec<String>,
}

/// Returns the canonical form and the smart rendering of the postfix sequence.
fn canonicalize(postfix: &Postfix) -> Result<(String, String), Error> {
    Ok((normalize(postfix)?, to_infix(postfix, Mode::Smart)?))
}

/// Collects `(canonical, score, original)` triples into classes, ordered by score, then by
/// canonical form.
fn group(members: Vec<(String, u32, String)>) -> Vec<EquivalenceClass> {
    let mut classes = BTreeMap::<(u32, String), BTreeSet<String>>::new();
    for (canonical, score, original) in members {
        let equivalents = classes.entry((score, canonical))
            .or_insert_with_key(|(score, canonical)| {
                debug!("new class `{}` with score {}", canonical, score);
                BTreeSet::new()
            });
        equivalents.insert(original);
    }

    classes.into_iter()
        .map(|((score, canonical), mut equivalents)| {
            equivalents.remove(&canonical);
            EquivalenceClass {
                canonical,
                score,
                equivalents: equivalents.into_iter().collect(),
            }
        })
        .collect()
}

/// Groups scored candidates into equivalence classes.
///
/// Two candidates are in the same class if they have the same canonical form and the same score.
/// Classes are returned ordered by score, then by canonical form. Candidates are normalized in
/// parallel.
///
/// Fails if any candidate is not evaluable. When several are not, which error is returned is
/// unspecified.
///
/// ```
/// use dice_compute::symbolic::humanize::humanize;
///
/// let candidates = [
///     ("12+3*".parse().unwrap(), 0),
///     ("321+*".parse().unwrap(), 0),
///     ("3!".parse().unwrap(), 5),
/// ];
/// let classes = humanize(&candidates).unwrap();
/// assert_eq!(classes.len(), 2);
/// assert_eq!(classes[0].canonical, "3*(1+2)");
/// assert_eq!(classes[0].equivalents, ["(1+2)*3", "3*(2+1)"]);
/// assert_eq!(classes[1].canonical, "3!");
/// ```
pub fn humanize(candidates: &[(Postfix, u32)]) -> Result<Vec<EquivalenceClass>, Error> {
    let members = candidates.par_iter()
        .map(|(postfix, score)| {
            let (canonical, original) = canonicalize(postfix)?;
            Ok((canonical, *score, original))
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(group(members))
}

/// Groups candidates into equivalence classes, scoring each one by applying the scorer to its
/// canonical form.
pub fn humanize_with<S>(candidates: &[Postfix], scorer: &S) -> Result<Vec<EquivalenceClass>, Error>
where
    S: Scorer + Sync,
{
    let members = candidates.par_iter()
        .map(|postfix| {
            let (canonical, original) = canonicalize(postfix)?;
            let score = scorer.score(&canonical);
            Ok((canonical, score, original))
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(group(members))
}
