//! Engine configuration

use serde::{Deserialize, Serialize};

/// Decision engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Visibility below this classifies the road as wet (meters)
    pub visibility_threshold_m: f64,

    /// Speeds below this never trigger an alarm (km/h)
    pub minimum_speed_kmh: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            visibility_threshold_m: 100.0,
            minimum_speed_kmh: 15.0,
        }
    }
}

impl EngineConfig {
    /// Strict preset: alarms from lower speeds, wet classification kicks in
    /// at better visibility
    pub fn strict() -> Self {
        Self {
            visibility_threshold_m: 150.0,
            minimum_speed_kmh: 10.0,
        }
    }

    /// Lenient preset: fewer nuisance alarms in slow traffic
    pub fn lenient() -> Self {
        Self {
            visibility_threshold_m: 60.0,
            minimum_speed_kmh: 20.0,
        }
    }
}
