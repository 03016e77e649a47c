//! Open-string tunings
//!
//! Strings are indexed from the lowest (index 0) to the highest (index 5)
//! and each open string is stored as a MIDI note number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::EngineError;
use super::pitch_class::PitchClass;

pub const STRING_COUNT: usize = 6;

/// Highest valid MIDI note number
pub const MAX_MIDI_NOTE: u8 = 127;

/// Open-string pitches of a six-string neck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tuning {
    pub open_strings: [u8; STRING_COUNT],
}

impl Tuning {
    /// E2 A2 D3 G3 B3 E4
    pub const STANDARD: Tuning = Tuning { open_strings: [40, 45, 50, 55, 59, 64] };
    /// D2 A2 D3 G3 B3 E4
    pub const DROP_D: Tuning = Tuning { open_strings: [38, 45, 50, 55, 59, 64] };
    /// D2 G2 D3 G3 B3 D4
    pub const OPEN_G: Tuning = Tuning { open_strings: [38, 43, 50, 55, 59, 62] };
    /// D2 A2 D3 G3 A3 D4
    pub const DADGAD: Tuning = Tuning { open_strings: [38, 45, 50, 55, 57, 62] };

    const PRESETS: [(&'static str, Tuning); 4] = [
        ("standard", Tuning::STANDARD),
        ("drop-d", Tuning::DROP_D),
        ("open-g", Tuning::OPEN_G),
        ("dadgad", Tuning::DADGAD),
    ];

    pub fn new(open_strings: [u8; STRING_COUNT]) -> Self {
        Self { open_strings }
    }

    /// Look up a named preset (case-insensitive)
    pub fn preset(name: &str) -> Option<Tuning> {
        let name = name.to_lowercase();
        Self::PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, tuning)| *tuning)
    }

    /// Reject open strings outside the MIDI range
    ///
    /// Tunings built by `FromStr` are already checked; deserialized ones are
    /// not.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.open_strings.iter().any(|&n| n > MAX_MIDI_NOTE) {
            return Err(EngineError::InvalidTuning(self.to_string()));
        }
        Ok(())
    }

    /// MIDI pitch sounding at `fret` on `string`
    pub fn pitch_at(&self, string: usize, fret: usize) -> Option<u8> {
        let open = *self.open_strings.get(string)?;
        u8::try_from(usize::from(open) + fret).ok()
    }

    pub fn pitch_class_at(&self, string: usize, fret: usize) -> Option<PitchClass> {
        self.pitch_at(string, fret).map(PitchClass::from_midi)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes: Vec<String> = self.open_strings.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", notes.join(" "))
    }
}

impl FromStr for Tuning {
    type Err = EngineError;

    /// Accepts a preset name or six whitespace-separated MIDI numbers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(preset) = Tuning::preset(trimmed) {
            return Ok(preset);
        }

        let notes = trimmed
            .split_whitespace()
            .map(|token| token.parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| EngineError::InvalidTuning(s.to_string()))?;

        let open_strings: [u8; STRING_COUNT] = notes
            .try_into()
            .map_err(|_| EngineError::InvalidTuning(s.to_string()))?;

        let tuning = Tuning::new(open_strings);
        tuning
            .validate()
            .map_err(|_| EngineError::InvalidTuning(s.to_string()))?;
        Ok(tuning)
    }
}
