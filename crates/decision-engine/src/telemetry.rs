//! Telemetry snapshot consumed per evaluation

use serde::{Deserialize, Serialize};

/// Visibility substituted when the weather collaborator has no estimate
/// (meters). Sits exactly at the default wet threshold and therefore
/// resolves to a dry road.
pub const DEFAULT_VISIBILITY_M: f64 = 100.0;

/// One evaluation's worth of driving telemetry.
///
/// Built fresh by the caller for every evaluation; the engine never
/// retains it. Fields are expected to have passed boundary validation:
/// non-negative speed and distance, positive finite visibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Whether the perception collaborator sees an object ahead
    pub object_detected: bool,

    /// Distance to the detected object (meters)
    pub object_distance_m: f64,

    /// Ground speed from the location collaborator (km/h)
    pub current_speed_kmh: f64,

    /// Visibility estimate from the weather collaborator (meters)
    pub visibility_m: f64,
}

impl TelemetrySnapshot {
    /// Snapshot with an explicit visibility estimate
    pub fn new(
        object_detected: bool,
        object_distance_m: f64,
        current_speed_kmh: f64,
        visibility_m: f64,
    ) -> Self {
        Self {
            object_detected,
            object_distance_m,
            current_speed_kmh,
            visibility_m,
        }
    }

    /// Snapshot from collaborators that may have no visibility estimate;
    /// substitutes [`DEFAULT_VISIBILITY_M`] when absent
    pub fn with_optional_visibility(
        object_detected: bool,
        object_distance_m: f64,
        current_speed_kmh: f64,
        visibility_m: Option<f64>,
    ) -> Self {
        Self::new(
            object_detected,
            object_distance_m,
            current_speed_kmh,
            visibility_m.unwrap_or(DEFAULT_VISIBILITY_M),
        )
    }
}
