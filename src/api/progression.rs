//! Progression operations for the WASM API
//!
//! Thin wrappers: deserialize, call into the engine, serialize. The host
//! owns the returned progression; nothing is stored on the WASM side.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, engine_error, serialize};
use crate::api::types::SolveResult;
use crate::config::FretboardConfig;
use crate::engine;
use crate::models::{Direction, Fretboard, PitchClassSet, Progression};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Solve the correspondence between two pitch-class sets
///
/// # Parameters
/// - `a`, `b`: pitch classes (0-11); duplicates are ignored
///
/// # Returns
/// `{ forward, backward, cost }`
#[wasm_bindgen(js_name = solvePitchClasses)]
pub fn solve_pitch_classes(a: Vec<u8>, b: Vec<u8>) -> Result<JsValue, JsValue> {
    let set_a =
        PitchClassSet::from_values(&a).map_err(|e| engine_error("solvePitchClasses", e))?;
    let set_b =
        PitchClassSet::from_values(&b).map_err(|e| engine_error("solvePitchClasses", e))?;

    let result = SolveResult::from(engine::solve(set_a, set_b));
    wasm_log!("solvePitchClasses {} -> {}: cost {}", set_a, set_b, result.cost);

    serialize(&result, "solvePitchClasses serialization error")
}

/// Rebuild diffs for a fretboard list without cascading highlights
#[wasm_bindgen(js_name = rebuildDiffs)]
pub fn rebuild_diffs(fretboards_js: JsValue, focused_index: usize) -> Result<JsValue, JsValue> {
    let fretboards: Vec<Fretboard> =
        deserialize(fretboards_js, "rebuildDiffs deserialization error")?;
    for fretboard in &fretboards {
        fretboard.validate().map_err(|e| engine_error("rebuildDiffs", e))?;
    }

    let progression = engine::rebuild_diffs(&fretboards, focused_index)
        .map_err(|e| engine_error("rebuildDiffs", e))?;
    serialize(&progression, "rebuildDiffs serialization error")
}

/// Cascade highlights from the focused fretboard
///
/// # Returns
/// A new progression with derived highlights and rebuilt diffs
#[wasm_bindgen(js_name = cascade)]
pub fn cascade(fretboards_js: JsValue, focused_index: usize) -> Result<JsValue, JsValue> {
    let fretboards: Vec<Fretboard> = deserialize(fretboards_js, "cascade deserialization error")?;
    wasm_info!("cascade called: {} fretboards, focus {}", fretboards.len(), focused_index);

    let progression =
        engine::cascade(&fretboards, focused_index).map_err(|e| engine_error("cascade", e))?;

    serialize(&progression, "cascade serialization error")
}

/// Per-cell diff of one fretboard toward a neighbor
///
/// # Parameters
/// - `direction`: `"left"` or `"right"`
///
/// # Returns
/// The cell diff, or `null` at the ends of the progression
#[wasm_bindgen(js_name = fretboardDiff)]
pub fn fretboard_diff(
    progression_js: JsValue,
    index: usize,
    direction_js: JsValue,
) -> Result<JsValue, JsValue> {
    let progression: Progression =
        deserialize(progression_js, "fretboardDiff deserialization error")?;
    let direction: Direction = deserialize(direction_js, "fretboardDiff direction error")?;

    match progression.fretboard_diff(index, direction) {
        Some(diff) => serialize(&diff, "fretboardDiff serialization error"),
        None => {
            wasm_warn!("fretboardDiff: no {:?} neighbor for fretboard {}", direction, index);
            Ok(JsValue::NULL)
        }
    }
}

/// Empty fretboard shaped by an optional configuration object
#[wasm_bindgen(js_name = defaultFretboard)]
pub fn default_fretboard(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: FretboardConfig =
        deserialize_or_default(config_js, "defaultFretboard config error")?;
    config.validate().map_err(|e| engine_error("defaultFretboard", e))?;

    serialize(&Fretboard::from_config(&config), "defaultFretboard serialization error")
}
