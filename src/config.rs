//! Fretboard configuration
//!
//! Shape of the fretboards a host creates. Every field has a default, so
//! `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};
use crate::models::Tuning;

pub const DEFAULT_FRET_COUNT: usize = 15;
pub const MAX_FRET_COUNT: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardConfig {
    pub tuning: Tuning,

    /// Cells per string, including the open string
    pub fret_count: usize,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            tuning: Tuning::STANDARD,
            fret_count: DEFAULT_FRET_COUNT,
        }
    }
}

impl FretboardConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FretboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.tuning.validate()?;
        if self.fret_count == 0 || self.fret_count > MAX_FRET_COUNT {
            return Err(EngineError::InvalidConfig(format!(
                "fret_count must be between 1 and {}, got {}",
                MAX_FRET_COUNT, self.fret_count
            )));
        }
        Ok(())
    }
}
