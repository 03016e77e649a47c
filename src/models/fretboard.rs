//! Fretboard grid state
//!
//! A fretboard is a 6 x N grid of `Status`, one row per string and one
//! column per fret (column 0 is the open string). The engine only ever
//! looks at it through pitch classes, but statuses are stored per cell
//! because the same pitch class appears in several places on the neck.

use serde::{Deserialize, Serialize};

use crate::config::FretboardConfig;
use crate::errors::{EngineError, Result};
use super::pitch_class::{PitchClass, PitchClassSet};
use super::status::{PitchClassStatuses, Status};
use super::tuning::{Tuning, STRING_COUNT};

/// One (string, fret) position and its status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub string: usize,
    pub fret: usize,
    pub pitch_class: PitchClass,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fretboard {
    pub tuning: Tuning,

    /// `strings[s][f]` is the status of fret `f` on string `s`
    strings: [Vec<Status>; STRING_COUNT],
}

impl Fretboard {
    /// Empty fretboard with every cell NotSelected
    pub fn new(tuning: Tuning, fret_count: usize) -> Self {
        Self {
            tuning,
            strings: std::array::from_fn(|_| vec![Status::NotSelected; fret_count]),
        }
    }

    pub fn from_config(config: &FretboardConfig) -> Self {
        Self::new(config.tuning, config.fret_count)
    }

    /// Build a fretboard with the given cells set
    pub fn with_cells(
        tuning: Tuning,
        fret_count: usize,
        cells: &[(usize, usize, Status)],
    ) -> Result<Self> {
        let mut fretboard = Self::new(tuning, fret_count);
        for &(string, fret, status) in cells {
            fretboard.set_status(string, fret, status)?;
        }
        Ok(fretboard)
    }

    pub fn fret_count(&self) -> usize {
        self.strings[0].len()
    }

    pub fn status(&self, string: usize, fret: usize) -> Option<Status> {
        self.strings.get(string)?.get(fret).copied()
    }

    pub fn set_status(&mut self, string: usize, fret: usize, status: Status) -> Result<()> {
        let count = self.fret_count();
        let row = self
            .strings
            .get_mut(string)
            .ok_or(EngineError::StringOutOfRange { string, count: STRING_COUNT })?;
        let cell = row
            .get_mut(fret)
            .ok_or(EngineError::FretOutOfRange { fret, count })?;
        *cell = status;
        Ok(())
    }

    /// Advance one cell through the edit cycle, returning its new status
    pub fn toggle(&mut self, string: usize, fret: usize) -> Result<Status> {
        let current = self
            .status(string, fret)
            .ok_or_else(|| self.out_of_range(string, fret))?;
        let next = current.toggled();
        self.set_status(string, fret, next)?;
        Ok(next)
    }

    fn out_of_range(&self, string: usize, fret: usize) -> EngineError {
        if string >= STRING_COUNT {
            EngineError::StringOutOfRange { string, count: STRING_COUNT }
        } else {
            EngineError::FretOutOfRange { fret, count: self.fret_count() }
        }
    }

    /// Every cell that is not NotSelected, string by string
    pub fn active_cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.strings.iter().enumerate().flat_map(move |(string, row)| {
            row.iter().enumerate().filter_map(move |(fret, &status)| {
                if !status.is_active() {
                    return None;
                }
                let pitch_class = self.tuning.pitch_class_at(string, fret)?;
                Some(GridCell { string, fret, pitch_class, status })
            })
        })
    }

    pub fn pitch_classes(&self) -> PitchClassSet {
        self.active_cells().map(|cell| cell.pitch_class).collect()
    }

    /// Strongest status found for each pitch class
    pub fn pitch_class_statuses(&self) -> PitchClassStatuses {
        let mut statuses = PitchClassStatuses::new();
        for cell in self.active_cells() {
            statuses.raise(cell.pitch_class, cell.status);
        }
        statuses
    }

    pub fn highlighted_pitch_classes(&self) -> PitchClassSet {
        self.pitch_class_statuses().highlighted()
    }

    /// MIDI numbers of every sounding cell, ascending and deduplicated
    pub fn active_pitches(&self) -> Vec<u8> {
        let mut pitches: Vec<u8> = self
            .active_cells()
            .filter_map(|cell| self.tuning.pitch_at(cell.string, cell.fret))
            .collect();
        pitches.sort_unstable();
        pitches.dedup();
        pitches
    }

    /// Demote every Highlighted cell to Selected
    pub fn clear_highlights(&mut self) {
        for status in self.strings.iter_mut().flatten() {
            *status = status.without_highlight();
        }
    }

    /// Raise every active cell of `pitch_class` to at least `status`
    ///
    /// Cells that are NotSelected stay off: status propagation never adds
    /// notes to a fretboard.
    pub fn raise_pitch_class(&mut self, pitch_class: PitchClass, status: Status) {
        let tuning = self.tuning;
        for (string, row) in self.strings.iter_mut().enumerate() {
            for (fret, cell) in row.iter_mut().enumerate() {
                if cell.is_active() && tuning.pitch_class_at(string, fret) == Some(pitch_class) {
                    *cell = (*cell).max(status);
                }
            }
        }
    }

    /// Check the grid shape of a deserialized fretboard
    pub fn validate(&self) -> Result<()> {
        self.tuning.validate()?;
        let expected = self.fret_count();
        for (string, row) in self.strings.iter().enumerate() {
            if row.len() != expected {
                return Err(EngineError::InconsistentGrid {
                    string,
                    found: row.len(),
                    expected,
                });
            }
        }
        Ok(())
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::from_config(&FretboardConfig::default())
    }
}
