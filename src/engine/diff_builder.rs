//! Diffs for every adjacent pair of fretboards

use crate::errors::{EngineError, Result};
use crate::models::{Fretboard, PitchClassDiff, Progression};
use super::correspondence::solve;

/// Left and right diff arrays, aligned with the fretboard list
///
/// `left[i]` is fretboard `i` relative to `i - 1` and `right[i]` is
/// fretboard `i` relative to `i + 1`; `left[0]` and `right[last]` are
/// `None`.
pub fn build_diff_arrays(
    fretboards: &[Fretboard],
) -> (Vec<Option<PitchClassDiff>>, Vec<Option<PitchClassDiff>>) {
    let mut left_diffs = vec![None; fretboards.len()];
    let mut right_diffs = vec![None; fretboards.len()];

    for (i, pair) in fretboards.windows(2).enumerate() {
        let correspondence = solve(pair[0].pitch_classes(), pair[1].pitch_classes());
        right_diffs[i] = Some(correspondence.forward);
        left_diffs[i + 1] = Some(correspondence.backward);
    }

    (left_diffs, right_diffs)
}

/// Reject an empty list or a focus past its end
pub(crate) fn check_focus(fretboards: &[Fretboard], focused_index: usize) -> Result<()> {
    if fretboards.is_empty() {
        return Err(EngineError::EmptyProgression);
    }
    if focused_index >= fretboards.len() {
        return Err(EngineError::IndexOutOfBounds {
            index: focused_index,
            len: fretboards.len(),
        });
    }
    Ok(())
}

/// Fresh progression over a copy of `fretboards` with rebuilt diffs
///
/// Statuses are taken as given; no cascade runs.
pub fn rebuild_diffs(fretboards: &[Fretboard], focused_index: usize) -> Result<Progression> {
    check_focus(fretboards, focused_index)?;
    let (left_diffs, right_diffs) = build_diff_arrays(fretboards);
    log::debug!("rebuilt diffs for {} fretboards", fretboards.len());

    Ok(Progression {
        fretboards: fretboards.to_vec(),
        left_diffs,
        right_diffs,
        focused_index,
    })
}
