//! Models module for the fretboard engine
//!
//! This module contains the data model shared by the engine and the
//! JavaScript API: statuses, pitch classes, tunings, fretboards, diffs
//! and progressions.

pub mod status;
pub mod pitch_class;
pub mod tuning;
pub mod fretboard;
pub mod diff;
pub mod progression;

// Re-export commonly used types
pub use status::{PitchClassStatuses, Status};
pub use pitch_class::{PitchClass, PitchClassSet, PITCH_CLASS_COUNT};
pub use tuning::{Tuning, STRING_COUNT};
pub use fretboard::{Fretboard, GridCell};
pub use diff::{CellDiff, DiffEntry, Direction, FretboardDiff, PitchClassDiff};
pub use progression::Progression;
