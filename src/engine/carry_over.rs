//! Carry-over of notes across valleys
//!
//! When a progression narrows and widens again (3 notes, 1 note, 3 notes)
//! the notes that disappear on the way down have no slide target on the
//! narrow fretboard. They are matched here against the notes that appear on
//! the way back up, and whatever stays unmatched is kept as a straggler
//! until a later hop gives it somewhere to land.

use crate::models::{DiffEntry, Fretboard, PitchClassDiff, PitchClassStatuses};
use super::correspondence::solve;

/// How in-flight notes land on the next fretboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarryOver {
    /// Synthetic source notes (disappeared plus stragglers) relative to the
    /// notes appearing on the next fretboard
    pub diff: PitchClassDiff,
    /// Status each source note carries
    pub sources: PitchClassStatuses,
    /// Sources still without a target
    pub stragglers: PitchClassStatuses,
}

/// Match disappeared notes and stragglers against appearing notes
///
/// `prev` is the fretboard the cascade just left together with its diff
/// relative to the current fretboard; it is `None` on the first hop.
/// `current_diff` is the current fretboard relative to `next`.
///
/// Returns `None` when nothing is in flight.
pub fn build_carry_over(
    prev: Option<(&Fretboard, &PitchClassDiff)>,
    next: &Fretboard,
    current_diff: &PitchClassDiff,
    stragglers: &PitchClassStatuses,
) -> Option<CarryOver> {
    let mut sources = *stragglers;
    if let Some((prev_fretboard, prev_diff)) = prev {
        let prev_statuses = prev_fretboard.pitch_class_statuses();
        for pc in prev_diff.disappearing().iter() {
            sources.raise(pc, prev_statuses.get(pc));
        }
    }

    if sources.is_empty() {
        return None;
    }

    let targets = current_diff.appearing().intersection(&next.pitch_classes());
    let diff = solve(sources.active(), targets).forward;

    let mut remaining = PitchClassStatuses::new();
    for (pc, entry) in diff.iter() {
        if entry == DiffEntry::Disappears {
            remaining.raise(pc, sources.get(pc));
        }
    }

    log::debug!(
        "carry-over: {} in flight, {} targets, {} stragglers left",
        sources.active().len(),
        targets.len(),
        remaining.active().len()
    );

    Some(CarryOver {
        diff,
        sources,
        stragglers: remaining,
    })
}
