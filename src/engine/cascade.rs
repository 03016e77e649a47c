//! Highlight cascade
//!
//! The focused fretboard holds the user's edit. Its highlights are walked
//! outward in both directions, one hop at a time: every note that slides
//! to the neighbor passes its status along, and notes that vanish are
//! handed to the carry-over pass so they can land on a later fretboard.

use crate::errors::Result;
use crate::models::{Direction, Fretboard, PitchClassDiff, PitchClassStatuses, Progression};
use super::carry_over::build_carry_over;
use super::diff_builder::{check_focus, rebuild_diffs};

/// Propagate the focused fretboard's highlights through the progression
///
/// Works on a copy of `fretboards`; every fretboard except the focused one
/// has its own highlights replaced by derived ones.
pub fn cascade(fretboards: &[Fretboard], focused_index: usize) -> Result<Progression> {
    check_focus(fretboards, focused_index)?;
    for fretboard in fretboards {
        fretboard.validate()?;
    }

    let mut progression = rebuild_diffs(fretboards, focused_index)?;
    for (i, fretboard) in progression.fretboards.iter_mut().enumerate() {
        if i != focused_index {
            fretboard.clear_highlights();
        }
    }

    log::debug!(
        "cascade from fretboard {} of {}",
        focused_index,
        progression.fretboards.len()
    );

    propagate(
        &mut progression.fretboards,
        &progression.left_diffs,
        focused_index,
        Direction::Left,
    );
    propagate(
        &mut progression.fretboards,
        &progression.right_diffs,
        focused_index,
        Direction::Right,
    );

    Ok(progression)
}

/// One directional pass, from the focus to the end of the list
///
/// `diffs[i]` must be fretboard `i` relative to its neighbor in
/// `direction`.
fn propagate(
    fretboards: &mut [Fretboard],
    diffs: &[Option<PitchClassDiff>],
    focused_index: usize,
    direction: Direction,
) {
    let len = fretboards.len();
    let mut stragglers = PitchClassStatuses::new();
    let mut previous: Option<usize> = None;
    let mut current = focused_index;

    while let Some(neighbor) = direction.step(current, len) {
        let Some(diff) = diffs[current].as_ref() else {
            break;
        };

        let statuses = fretboards[current].pitch_class_statuses();
        let prev = previous.and_then(|p| diffs[p].as_ref().map(|d| (&fretboards[p], d)));
        let carry = build_carry_over(prev, &fretboards[neighbor], diff, &stragglers);

        let target = &mut fretboards[neighbor];
        target.clear_highlights();

        for (pc, d) in diff.slides() {
            target.raise_pitch_class(pc.transpose(d), statuses.get(pc));
        }

        stragglers = match carry {
            Some(carry) => {
                for (pc, d) in carry.diff.slides() {
                    target.raise_pitch_class(pc.transpose(d), carry.sources.get(pc));
                }
                carry.stragglers
            }
            None => PitchClassStatuses::new(),
        };

        log::debug!(
            "{:?} hop {} -> {}: {} highlighted, {} stragglers",
            direction,
            current,
            neighbor,
            target.highlighted_pitch_classes().len(),
            stragglers.active().len()
        );

        previous = Some(current);
        current = neighbor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use crate::models::{PitchClass, Status, Tuning};

    fn pc(value: u8) -> PitchClass {
        PitchClass::new(value).unwrap()
    }

    /// Notes on the low E string (pitch class = fret + 4)
    fn board(cells: &[(usize, Status)]) -> Fretboard {
        let cells: Vec<_> = cells.iter().map(|&(f, s)| (0, f, s)).collect();
        Fretboard::with_cells(Tuning::STANDARD, 12, &cells).unwrap()
    }

    #[test]
    fn test_rejects_bad_focus() {
        assert_eq!(cascade(&[], 0), Err(EngineError::EmptyProgression));
        assert_eq!(
            cascade(&[board(&[])], 1),
            Err(EngineError::IndexOutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_forward_slide_copies_highlight() {
        // E (highlighted), G -> F, A
        let fretboards = vec![
            board(&[(0, Status::Highlighted), (3, Status::Selected)]),
            board(&[(1, Status::Selected), (5, Status::Selected)]),
        ];
        let progression = cascade(&fretboards, 0).unwrap();
        assert_eq!(progression.fretboards[1].status(0, 1), Some(Status::Highlighted));
        assert_eq!(progression.fretboards[1].status(0, 5), Some(Status::Selected));
    }

    #[test]
    fn test_backward_slide_copies_highlight() {
        let fretboards = vec![
            board(&[(0, Status::Selected), (3, Status::Selected)]),
            board(&[(1, Status::Selected), (5, Status::Highlighted)]),
        ];
        let progression = cascade(&fretboards, 1).unwrap();
        // A slid down from G
        assert_eq!(progression.fretboards[0].status(0, 3), Some(Status::Highlighted));
        assert_eq!(progression.fretboards[0].status(0, 0), Some(Status::Selected));
    }

    #[test]
    fn test_stale_highlights_are_cleared() {
        let fretboards = vec![
            board(&[(0, Status::Selected)]),
            board(&[(1, Status::Highlighted)]),
        ];
        let progression = cascade(&fretboards, 0).unwrap();
        assert_eq!(progression.fretboards[1].status(0, 1), Some(Status::Selected));
    }

    #[test]
    fn test_focused_fretboard_is_untouched() {
        let fretboards = vec![
            board(&[(0, Status::Highlighted)]),
            board(&[(2, Status::Highlighted), (3, Status::Selected)]),
        ];
        let progression = cascade(&fretboards, 1).unwrap();
        assert_eq!(progression.fretboards[1], fretboards[1]);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let fretboards = vec![
            board(&[(0, Status::Highlighted)]),
            board(&[(1, Status::Highlighted)]),
        ];
        let before = fretboards.clone();
        let _ = cascade(&fretboards, 0).unwrap();
        assert_eq!(fretboards, before);
    }

    #[test]
    fn test_highlight_survives_valley() {
        // E, G (highlighted) -> E -> E, G#, B
        let fretboards = vec![
            board(&[(0, Status::Selected), (3, Status::Highlighted)]),
            board(&[(0, Status::Selected)]),
            board(&[(0, Status::Selected), (4, Status::Selected), (7, Status::Selected)]),
        ];
        let progression = cascade(&fretboards, 0).unwrap();
        assert!(progression.fretboards[1].highlighted_pitch_classes().is_empty());
        assert_eq!(progression.fretboards[2].highlighted_pitch_classes().to_vec(), vec![pc(8)]);
    }

    #[test]
    fn test_straggler_crosses_two_narrow_fretboards() {
        // E, G (highlighted) -> E -> E -> E, A
        let fretboards = vec![
            board(&[(0, Status::Selected), (3, Status::Highlighted)]),
            board(&[(0, Status::Selected)]),
            board(&[(0, Status::Selected)]),
            board(&[(0, Status::Selected), (5, Status::Selected)]),
        ];
        let progression = cascade(&fretboards, 0).unwrap();
        assert!(progression.fretboards[2].highlighted_pitch_classes().is_empty());
        assert_eq!(progression.fretboards[3].highlighted_pitch_classes().to_vec(), vec![pc(9)]);
    }

    #[test]
    fn test_highlight_survives_valley_walking_left() {
        // E, G#, B <- E <- E, G (highlighted)
        let fretboards = vec![
            board(&[(0, Status::Selected), (4, Status::Selected), (7, Status::Selected)]),
            board(&[(0, Status::Selected)]),
            board(&[(0, Status::Selected), (3, Status::Highlighted)]),
        ];
        let progression = cascade(&fretboards, 2).unwrap();
        assert!(progression.fretboards[1].highlighted_pitch_classes().is_empty());
        assert_eq!(progression.fretboards[0].highlighted_pitch_classes().to_vec(), vec![pc(8)]);
        assert_eq!(progression.fretboards[0].status(0, 4), Some(Status::Highlighted));
    }

    #[test]
    fn test_straggler_crosses_two_narrow_fretboards_walking_left() {
        // E, A <- E <- E <- E, G (highlighted)
        let fretboards = vec![
            board(&[(0, Status::Selected), (5, Status::Selected)]),
            board(&[(0, Status::Selected)]),
            board(&[(0, Status::Selected)]),
            board(&[(0, Status::Selected), (3, Status::Highlighted)]),
        ];
        let progression = cascade(&fretboards, 3).unwrap();
        assert!(progression.fretboards[2].highlighted_pitch_classes().is_empty());
        assert!(progression.fretboards[1].highlighted_pitch_classes().is_empty());
        assert_eq!(progression.fretboards[0].highlighted_pitch_classes().to_vec(), vec![pc(9)]);
    }

    #[test]
    fn test_rejects_out_of_range_tuning() {
        let mut bad = board(&[(0, Status::Selected)]);
        bad.tuning = Tuning::new([250, 45, 50, 55, 59, 64]);
        assert!(matches!(
            cascade(&[board(&[]), bad], 0),
            Err(EngineError::InvalidTuning(_))
        ));
    }
}
