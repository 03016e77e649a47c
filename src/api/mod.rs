//! Fretboard engine WASM API
//!
//! This module provides the JavaScript-facing API for the engine.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and error conversion
//! - `types`: result shapes returned to JavaScript
//! - `progression`: solver, diff, cascade and fretboard operations

pub mod helpers;
pub mod types;
pub mod progression;

pub use progression::{
    cascade, default_fretboard, fretboard_diff, rebuild_diffs, solve_pitch_classes,
};
