//! Error types for the fretboard engine
//!
//! Only malformed caller input is reported through `EngineError`. Contract
//! violations inside the solver are assertions, not recoverable errors.

use thiserror::Error;

/// Top-level engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Pitch class outside 0-11
    #[error("invalid pitch class: {0} (expected 0-11)")]
    InvalidPitchClass(u8),

    /// String index outside the six strings of the neck
    #[error("string {string} out of range (fretboard has {count} strings)")]
    StringOutOfRange { string: usize, count: usize },

    /// Fret index past the end of the neck
    #[error("fret {fret} out of range (fretboard has {count} frets)")]
    FretOutOfRange { fret: usize, count: usize },

    /// Strings of one fretboard disagree on their fret count
    #[error("inconsistent grid: string {string} has {found} frets, expected {expected}")]
    InconsistentGrid {
        string: usize,
        found: usize,
        expected: usize,
    },

    /// Focused (or edited) fretboard index past the end of the progression
    #[error("fretboard index {index} out of bounds (progression has {len} fretboards)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A progression needs at least one fretboard
    #[error("progression must contain at least one fretboard")]
    EmptyProgression,

    /// Tuning string could not be parsed
    #[error("invalid tuning '{0}': expected a preset name or six MIDI note numbers (0-127)")]
    InvalidTuning(String),

    /// Configuration rejected during validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization failure
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::InvalidPitchClass(14).to_string(),
            "invalid pitch class: 14 (expected 0-11)"
        );
        assert_eq!(
            EngineError::IndexOutOfBounds { index: 3, len: 2 }.to_string(),
            "fretboard index 3 out of bounds (progression has 2 fretboards)"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err: EngineError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(matches!(err, EngineError::Serialization(_)));
    }
}
