//! Minimum-movement correspondence between two pitch-class sets
//!
//! Equal-size sets are matched by trying every cyclic rotation of the
//! sorted sequences against each other. Unequal sets first pick which
//! members of the larger set take part, trying every combination of the
//! smaller set's size, and match the rest as appearing or disappearing.
//!
//! Rotation candidates are ranked by total absolute movement, then by the
//! sum of squared movements, so three one-semitone slides beat one
//! three-semitone slide. Combination candidates are ranked by total
//! movement only; the first minimal combination wins.

use itertools::Itertools;

use crate::models::{DiffEntry, PitchClass, PitchClassDiff, PitchClassSet};

/// A concrete pairing between two equal-length sequences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    /// `(from, to)` pairs, `from` drawn from the longer side
    pub pairs: Vec<(PitchClass, PitchClass)>,
    /// Sum of absolute slide distances
    pub cost: u32,
    /// Sum of squared slide distances
    pub score: u32,
}

impl Matching {
    fn from_pairs(pairs: Vec<(PitchClass, PitchClass)>) -> Self {
        let (cost, score) = pairs.iter().fold((0, 0), |(cost, score), (from, to)| {
            let d = u32::from(from.signed_distance_to(*to).unsigned_abs());
            (cost + d, score + d * d)
        });
        Self { pairs, cost, score }
    }
}

/// Result of solving one pair of sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Correspondence {
    /// First argument relative to the second
    pub forward: PitchClassDiff,
    /// Second argument relative to the first
    pub backward: PitchClassDiff,
    /// Total movement of the chosen matching
    pub cost: u32,
}

/// Pair `longer[i]` with `shorter[(i + offset) % len]`
fn rotation(longer: &[PitchClass], shorter: &[PitchClass], offset: usize) -> Matching {
    let len = shorter.len();
    let pairs = longer
        .iter()
        .enumerate()
        .map(|(i, from)| (*from, shorter[(i + offset) % len]))
        .collect();
    Matching::from_pairs(pairs)
}

/// Best cyclic pairing of two equal-length ascending sequences
pub fn best_rotation(longer: &[PitchClass], shorter: &[PitchClass]) -> Matching {
    assert_eq!(
        longer.len(),
        shorter.len(),
        "rotation search needs equal-length sequences"
    );

    (0..shorter.len())
        .map(|r| rotation(longer, shorter, r))
        .inspect(|m| log::trace!("rotation candidate cost={} score={}", m.cost, m.score))
        .min_by_key(|m| (m.cost, m.score))
        .unwrap_or_default()
}

/// Best pairing of `shorter` with any same-size subset of `longer`
///
/// Members of `longer` missing from the returned pairs are unmatched.
pub fn best_subset_matching(longer: &[PitchClass], shorter: &[PitchClass]) -> Matching {
    assert!(
        shorter.len() <= longer.len(),
        "shorter set ({}) larger than longer set ({})",
        shorter.len(),
        longer.len()
    );

    longer
        .iter()
        .copied()
        .combinations(shorter.len())
        .map(|subset| best_rotation(&subset, shorter))
        .min_by_key(|m| m.cost)
        .unwrap_or_default()
}

/// Solve the correspondence between two pitch-class sets
///
/// `forward` describes `a` relative to `b`, `backward` describes `b`
/// relative to `a`; one is the exact reversal of the other.
pub fn solve(a: PitchClassSet, b: PitchClassSet) -> Correspondence {
    let a_is_longer = a.len() >= b.len();
    let (longer, shorter) = if a_is_longer { (a, b) } else { (b, a) };

    let matching = best_subset_matching(&longer.to_vec(), &shorter.to_vec());

    let mut long_to_short = PitchClassDiff::new();
    let mut unmatched = longer;
    for (from, to) in &matching.pairs {
        long_to_short.insert(*from, DiffEntry::Slide(from.signed_distance_to(*to)));
        unmatched.remove(*from);
    }
    for pc in unmatched.iter() {
        long_to_short.insert(pc, DiffEntry::Disappears);
    }
    let short_to_long = long_to_short.reversed();

    log::trace!(
        "solve {} -> {}: cost {}, {} unmatched",
        a,
        b,
        matching.cost,
        unmatched.len()
    );

    let (forward, backward) = if a_is_longer {
        (long_to_short, short_to_long)
    } else {
        (short_to_long, long_to_short)
    };

    Correspondence {
        forward,
        backward,
        cost: matching.cost,
    }
}
