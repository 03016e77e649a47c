//! Pitch classes and pitch-class sets
//!
//! A pitch class is a semitone position 0-11 independent of octave
//! (C = 0). Sets are stored as a 12-bit mask, so iteration is always in
//! ascending order, which the rotation search depends on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::EngineError;

pub const PITCH_CLASS_COUNT: usize = 12;

const NAMES: [&str; PITCH_CLASS_COUNT] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the twelve semitone positions
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    /// Checked constructor; `None` outside 0-11
    pub fn new(value: u8) -> Option<Self> {
        (usize::from(value) < PITCH_CLASS_COUNT).then_some(PitchClass(value))
    }

    /// Pitch class of a MIDI note number
    pub fn from_midi(midi: u8) -> Self {
        PitchClass(midi % PITCH_CLASS_COUNT as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }

    /// All twelve pitch classes in ascending order
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..PITCH_CLASS_COUNT as u8).map(PitchClass)
    }

    /// Move by a signed number of semitones, wrapping at the octave
    pub fn transpose(self, semitones: i8) -> Self {
        let shifted =
            (i16::from(self.0) + i16::from(semitones)).rem_euclid(PITCH_CLASS_COUNT as i16);
        PitchClass(shifted as u8)
    }

    /// Shortest signed distance from `self` to `other`, in -5..=6
    ///
    /// The tritone is ambiguous; it always resolves upward (+6).
    pub fn signed_distance_to(self, other: PitchClass) -> i8 {
        let up = (i16::from(other.0) - i16::from(self.0)).rem_euclid(PITCH_CLASS_COUNT as i16);
        if up > 6 {
            (up - PITCH_CLASS_COUNT as i16) as i8
        } else {
            up as i8
        }
    }

    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PitchClass::new(value).ok_or(EngineError::InvalidPitchClass(value))
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> Self {
        pc.0
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Set of pitch classes (bit `n` set = pitch class `n` present)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw values, rejecting anything outside 0-11
    pub fn from_values(values: &[u8]) -> Result<Self, EngineError> {
        values
            .iter()
            .map(|&v| PitchClass::try_from(v))
            .collect::<Result<PitchClassSet, _>>()
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.0 |= 1 << pc.0;
    }

    pub fn remove(&mut self, pc: PitchClass) {
        self.0 &= !(1 << pc.0);
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.0 & (1 << pc.0) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn intersection(&self, other: &PitchClassSet) -> PitchClassSet {
        PitchClassSet(self.0 & other.0)
    }

    pub fn union(&self, other: &PitchClassSet) -> PitchClassSet {
        PitchClassSet(self.0 | other.0)
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        PitchClass::all().filter(move |pc| self.contains(*pc))
    }

    pub fn to_vec(&self) -> Vec<PitchClass> {
        self.iter().collect()
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PitchClassSet::new();
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}

impl fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(PitchClass::name).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
