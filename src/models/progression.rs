//! Progression: ordered fretboards plus their directional diffs
//!
//! A progression is never edited in place. Every operation below returns
//! a new progression with freshly rebuilt diffs and a fresh cascade.

use serde::{Deserialize, Serialize};

use crate::engine::cascade;
use crate::errors::{EngineError, Result};
use super::diff::{CellDiff, DiffEntry, Direction, FretboardDiff, PitchClassDiff};
use super::fretboard::Fretboard;
use super::status::Status;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub fretboards: Vec<Fretboard>,
    /// `left_diffs[i]`: fretboard `i` relative to `i - 1`
    pub left_diffs: Vec<Option<PitchClassDiff>>,
    /// `right_diffs[i]`: fretboard `i` relative to `i + 1`
    pub right_diffs: Vec<Option<PitchClassDiff>>,
    pub focused_index: usize,
}

impl Progression {
    /// Cascade `fretboards` from `focused_index`
    pub fn new(fretboards: Vec<Fretboard>, focused_index: usize) -> Result<Self> {
        cascade(&fretboards, focused_index)
    }

    pub fn len(&self) -> usize {
        self.fretboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fretboards.is_empty()
    }

    pub fn focused(&self) -> Option<&Fretboard> {
        self.fretboards.get(self.focused_index)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(EngineError::IndexOutOfBounds { index, len: self.len() });
        }
        Ok(())
    }

    /// Replace one fretboard; the edited fretboard takes focus
    pub fn with_fretboard(&self, index: usize, fretboard: Fretboard) -> Result<Self> {
        self.check_index(index)?;
        let mut fretboards = self.fretboards.clone();
        fretboards[index] = fretboard;
        cascade(&fretboards, index)
    }

    /// Toggle one cell; the edited fretboard takes focus
    pub fn with_cell_toggled(&self, index: usize, string: usize, fret: usize) -> Result<Self> {
        self.check_index(index)?;
        let mut fretboard = self.fretboards[index].clone();
        fretboard.toggle(string, fret)?;
        self.with_fretboard(index, fretboard)
    }

    /// Insert a fretboard before `index` (`index == len` appends)
    ///
    /// Focus moves to the inserted fretboard.
    pub fn with_inserted(&self, index: usize, fretboard: Fretboard) -> Result<Self> {
        if index > self.len() {
            return Err(EngineError::IndexOutOfBounds { index, len: self.len() });
        }
        let mut fretboards = self.fretboards.clone();
        fretboards.insert(index, fretboard);
        cascade(&fretboards, index)
    }

    /// Remove one fretboard; focus stays put when it can, else clamps
    pub fn without(&self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        if self.len() == 1 {
            return Err(EngineError::EmptyProgression);
        }
        let mut fretboards = self.fretboards.clone();
        fretboards.remove(index);

        let focused_index = if self.focused_index > index {
            self.focused_index - 1
        } else {
            self.focused_index.min(fretboards.len() - 1)
        };
        cascade(&fretboards, focused_index)
    }

    /// Re-cascade from a different fretboard
    pub fn with_focus(&self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        cascade(&self.fretboards, index)
    }

    /// Per-cell view of fretboard `index` relative to its neighbor
    ///
    /// `None` when there is no neighbor in that direction.
    pub fn fretboard_diff(&self, index: usize, direction: Direction) -> Option<FretboardDiff> {
        let fretboard = self.fretboards.get(index)?;
        let neighbor = &self.fretboards[direction.step(index, self.len())?];
        let diff = match direction {
            Direction::Left => self.left_diffs.get(index)?.as_ref()?,
            Direction::Right => self.right_diffs.get(index)?.as_ref()?,
        };

        let neighbor_statuses = neighbor.pitch_class_statuses();
        let mut cells = Vec::new();

        for cell in fretboard.active_cells() {
            let Some(entry) = diff.get(cell.pitch_class) else {
                continue;
            };
            let to_status = match entry {
                DiffEntry::Slide(d) => neighbor_statuses.get(cell.pitch_class.transpose(d)),
                DiffEntry::Appears | DiffEntry::Disappears => Status::NotSelected,
            };
            cells.push(CellDiff {
                string: cell.string,
                fret: cell.fret,
                pitch_class: cell.pitch_class,
                slide: entry,
                from_status: cell.status,
                to_status,
            });
        }

        for cell in neighbor.active_cells() {
            if diff.get(cell.pitch_class) == Some(DiffEntry::Appears) {
                cells.push(CellDiff {
                    string: cell.string,
                    fret: cell.fret,
                    pitch_class: cell.pitch_class,
                    slide: DiffEntry::Appears,
                    from_status: Status::NotSelected,
                    to_status: cell.status,
                });
            }
        }

        Some(FretboardDiff {
            direction: Some(direction),
            cells,
        })
    }
}
