//! Pitch-class diff and highlight cascade engine
//!
//! - `correspondence`: minimum-movement matching between two pitch-class sets
//! - `diff_builder`: left/right diffs for every adjacent pair of fretboards
//! - `carry_over`: tracks notes that vanish in a narrow fretboard
//! - `cascade`: propagates the focused fretboard's highlights outward
//!
//! Everything here is a pure function of its inputs.

pub mod correspondence;
pub mod diff_builder;
pub mod carry_over;
pub mod cascade;

pub use correspondence::{solve, Correspondence, Matching};
pub use diff_builder::rebuild_diffs;
pub use carry_over::{build_carry_over, CarryOver};
pub use cascade::cascade;
