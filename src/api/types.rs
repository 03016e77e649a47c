//! Result types returned across the JS boundary

use crate::engine::Correspondence;
use crate::models::PitchClassDiff;

/// Result of `solvePitchClasses`
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    pub forward: PitchClassDiff,
    pub backward: PitchClassDiff,
    pub cost: u32,
}

impl From<Correspondence> for SolveResult {
    fn from(correspondence: Correspondence) -> Self {
        Self {
            forward: correspondence.forward,
            backward: correspondence.backward,
            cost: correspondence.cost,
        }
    }
}
