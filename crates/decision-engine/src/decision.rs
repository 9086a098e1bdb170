//! Alarm decision produced per evaluation

use serde::{Deserialize, Serialize};
use stopping_distance::RoadCondition;

/// Why a decision came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionBasis {
    /// No object in view; nothing to evaluate
    NoObject,

    /// Vehicle below the minimum alarm speed
    BelowMinimumSpeed,

    /// Object distance compared against the stopping distance
    DistanceCompared,

    /// Table lookup failed; alarm withheld and the inconsistency logged
    TableLookupFailed,
}

/// Outcome of one evaluation.
///
/// The diagnostic fields are only populated when the evaluation reached
/// the distance comparison; fast-path suppressions skip that work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlarmDecision {
    /// Whether the alarm should fire
    pub trigger: bool,

    /// What the decision was based on
    pub basis: DecisionBasis,

    /// Resolved road condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_condition: Option<RoadCondition>,

    /// Matched speed bracket (km/h)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_bracket_kmh: Option<u16>,

    /// Looked-up stopping distance (meters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopping_distance_m: Option<f64>,
}

impl AlarmDecision {
    /// Suppressed decision without diagnostics (fast paths and lookup failure)
    pub(crate) fn no_trigger(basis: DecisionBasis) -> Self {
        Self {
            trigger: false,
            basis,
            road_condition: None,
            speed_bracket_kmh: None,
            stopping_distance_m: None,
        }
    }
}
