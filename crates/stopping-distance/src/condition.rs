//! Road surface condition classification

use serde::{Deserialize, Serialize};

/// Road surface condition selecting the stopping-distance column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadCondition {
    Dry,
    Wet,
}

impl RoadCondition {
    /// Classify the road surface from a visibility estimate.
    ///
    /// Low visibility serves as a proxy for a wet, reduced-friction surface.
    /// Visibility exactly at the threshold counts as `Dry`; there is no
    /// hysteresis.
    pub fn from_visibility(visibility_m: f64, threshold_m: f64) -> Self {
        if visibility_m < threshold_m {
            RoadCondition::Wet
        } else {
            RoadCondition::Dry
        }
    }
}
