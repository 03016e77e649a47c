//! Directional diffs between adjacent fretboards
//!
//! A `PitchClassDiff` from X to Y is keyed by X's pitch classes, each
//! either sliding to a Y pitch class or disappearing, plus one `Appears`
//! entry for every Y pitch class nothing slides onto.

use serde::{Deserialize, Serialize};

use super::pitch_class::{PitchClass, PitchClassSet, PITCH_CLASS_COUNT};
use super::status::Status;

/// What happens to one pitch class between two fretboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffEntry {
    /// Moves by this many semitones
    Slide(i8),
    /// Newly introduced on the other side
    Appears,
    /// Has no counterpart on the other side
    Disappears,
}

impl DiffEntry {
    /// Semitone distance for slides, `None` for sentinels
    pub fn slide(self) -> Option<i8> {
        match self {
            DiffEntry::Slide(d) => Some(d),
            DiffEntry::Appears | DiffEntry::Disappears => None,
        }
    }

    pub fn is_sentinel(self) -> bool {
        self.slide().is_none()
    }
}

/// Sparse pitch class -> entry map for one direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchClassDiff {
    entries: [Option<DiffEntry>; PITCH_CLASS_COUNT],
}

impl PitchClassDiff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pitch_class: PitchClass) -> Option<DiffEntry> {
        self.entries[pitch_class.index()]
    }

    pub fn insert(&mut self, pitch_class: PitchClass, entry: DiffEntry) {
        self.entries[pitch_class.index()] = Some(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = (PitchClass, DiffEntry)> + '_ {
        PitchClass::all().filter_map(move |pc| self.get(pc).map(|entry| (pc, entry)))
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pitch classes that slide, with their distance
    pub fn slides(&self) -> impl Iterator<Item = (PitchClass, i8)> + '_ {
        self.iter()
            .filter_map(|(pc, entry)| entry.slide().map(|d| (pc, d)))
    }

    pub fn disappearing(&self) -> PitchClassSet {
        self.iter()
            .filter(|(_, entry)| *entry == DiffEntry::Disappears)
            .map(|(pc, _)| pc)
            .collect()
    }

    pub fn appearing(&self) -> PitchClassSet {
        self.iter()
            .filter(|(_, entry)| *entry == DiffEntry::Appears)
            .map(|(pc, _)| pc)
            .collect()
    }

    /// Total absolute movement of all slides
    pub fn total_movement(&self) -> u32 {
        self.slides().map(|(_, d)| u32::from(d.unsigned_abs())).sum()
    }

    /// The same correspondence seen from the other side
    ///
    /// `p -> Slide(d)` becomes `p + d -> Slide(-d)` and the two sentinels
    /// swap. Reversing rather than re-solving keeps tritone slides
    /// consistent (+6 one way, -6 the other).
    pub fn reversed(&self) -> PitchClassDiff {
        let mut reversed = PitchClassDiff::new();
        for (pc, entry) in self.iter() {
            match entry {
                DiffEntry::Slide(d) => reversed.insert(pc.transpose(d), DiffEntry::Slide(-d)),
                DiffEntry::Appears => reversed.insert(pc, DiffEntry::Disappears),
                DiffEntry::Disappears => reversed.insert(pc, DiffEntry::Appears),
            }
        }
        reversed
    }
}

/// Which neighbor a diff is relative to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Toward index - 1
    Left,
    /// Toward index + 1
    Right,
}

impl Direction {
    /// Neighbor index in this direction, if it exists
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Left => index.checked_sub(1),
            Direction::Right => (index + 1 < len).then_some(index + 1),
        }
    }
}

/// One grid cell's part in a transition, for renderers and audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDiff {
    pub string: usize,
    pub fret: usize,
    pub pitch_class: PitchClass,
    pub slide: DiffEntry,
    pub from_status: Status,
    pub to_status: Status,
}

/// Per-cell view of a `PitchClassDiff`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardDiff {
    pub direction: Option<Direction>,
    pub cells: Vec<CellDiff>,
}
