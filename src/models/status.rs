//! Per-cell selection status
//!
//! A grid cell is either off, selected (part of the chord), or highlighted
//! (selected and emphasized). The ordering `NotSelected < Selected <
//! Highlighted` is what status propagation relies on: a propagated status
//! can only raise a cell, never lower it.

use super::pitch_class::{PitchClass, PitchClassSet, PITCH_CLASS_COUNT};

/// Tri-state status of a single fretboard cell
#[repr(u8)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde_repr::Serialize_repr,
    serde_repr::Deserialize_repr,
)]
pub enum Status {
    /// Cell is not part of the chord
    #[default]
    NotSelected = 0,

    /// Cell is sounding
    Selected = 1,

    /// Cell is sounding and emphasized
    Highlighted = 2,
}

impl Status {
    /// True for Selected and Highlighted
    pub fn is_active(self) -> bool {
        self != Status::NotSelected
    }

    /// The user edit cycle: off -> selected -> highlighted -> off
    pub fn toggled(self) -> Self {
        match self {
            Status::NotSelected => Status::Selected,
            Status::Selected => Status::Highlighted,
            Status::Highlighted => Status::NotSelected,
        }
    }

    /// Drop emphasis but keep the note
    pub fn without_highlight(self) -> Self {
        match self {
            Status::Highlighted => Status::Selected,
            other => other,
        }
    }
}

/// Strongest status per pitch class
///
/// Used both as a summary of a fretboard (octave duplicates collapse into
/// one entry) and as the synthetic note set tracked by the carry-over pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PitchClassStatuses {
    statuses: [Status; PITCH_CLASS_COUNT],
}

impl PitchClassStatuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pitch_class: PitchClass) -> Status {
        self.statuses[pitch_class.index()]
    }

    /// Raise the entry to `status` if it is currently weaker
    pub fn raise(&mut self, pitch_class: PitchClass, status: Status) {
        let slot = &mut self.statuses[pitch_class.index()];
        *slot = (*slot).max(status);
    }

    /// Pitch classes with any active status
    pub fn active(&self) -> PitchClassSet {
        PitchClass::all()
            .filter(|pc| self.get(*pc).is_active())
            .collect()
    }

    /// Pitch classes that are highlighted
    pub fn highlighted(&self) -> PitchClassSet {
        PitchClass::all()
            .filter(|pc| self.get(*pc) == Status::Highlighted)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.iter().all(|s| !s.is_active())
    }

    /// Active entries in ascending pitch-class order
    pub fn iter(&self) -> impl Iterator<Item = (PitchClass, Status)> + '_ {
        PitchClass::all()
            .map(move |pc| (pc, self.get(pc)))
            .filter(|(_, status)| status.is_active())
    }
}
