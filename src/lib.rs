//! Fretboard Progression WASM Module
//!
//! Computes how the notes of one fretboard correspond to the notes of the
//! next, and carries highlighted notes consistently through an ordered
//! sequence of fretboards.

pub mod config;
pub mod errors;
pub mod models;
pub mod engine;
pub mod api;

// Re-export commonly used types
pub use config::FretboardConfig;
pub use errors::{EngineError, Result};
pub use models::*;
pub use engine::{build_carry_over, cascade, rebuild_diffs, solve, CarryOver, Correspondence};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("Fretboard engine WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    // A second start call finds the logger already installed
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
