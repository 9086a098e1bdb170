//! Decision Engine Implementation

use crate::{AlarmDecision, DecisionBasis, EngineConfig, TelemetrySnapshot};
use stopping_distance::{RoadCondition, StoppingDistanceTable};
use tracing::{debug, error};

/// Width of a table bracket step (km/h)
const BRACKET_STEP_KMH: f64 = 10.0;

/// Pure evaluator turning telemetry snapshots into alarm decisions.
///
/// Holds the immutable table and tuning constants; evaluation reads them
/// and nothing else, so a shared engine can serve concurrent callers
/// without synchronization.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    table: StoppingDistanceTable,
    config: EngineConfig,
}

impl DecisionEngine {
    /// Create an engine over a table with the given tuning
    pub fn new(table: StoppingDistanceTable, config: EngineConfig) -> Self {
        Self { table, config }
    }

    /// Engine over the reference table with default tuning
    pub fn with_reference_table() -> Self {
        Self::new(StoppingDistanceTable::reference(), EngineConfig::default())
    }

    /// Evaluate one telemetry snapshot.
    ///
    /// Never panics and never errors for well-formed input; an internal
    /// table inconsistency is logged and resolved to a no-trigger decision.
    pub fn evaluate(&self, snapshot: &TelemetrySnapshot) -> AlarmDecision {
        if !snapshot.object_detected {
            return AlarmDecision::no_trigger(DecisionBasis::NoObject);
        }

        if snapshot.current_speed_kmh < self.config.minimum_speed_kmh {
            debug!(
                "Alarm suppressed: speed {:.1} km/h below minimum {:.1} km/h",
                snapshot.current_speed_kmh, self.config.minimum_speed_kmh
            );
            return AlarmDecision::no_trigger(DecisionBasis::BelowMinimumSpeed);
        }

        let condition = RoadCondition::from_visibility(
            snapshot.visibility_m,
            self.config.visibility_threshold_m,
        );
        let rounded_speed = round_to_bracket_step(snapshot.current_speed_kmh);
        let bracket = self.table.closest_bracket(rounded_speed);

        let stopping_distance_m = match self.table.lookup(bracket, condition) {
            Ok(distance) => distance,
            Err(err) => {
                // Unreachable when the bracket came from closest_bracket;
                // surfaced on the diagnostic channel instead of panicking.
                error!(
                    "Stopping-distance lookup failed for bracket {} ({:?}): {}",
                    bracket, condition, err
                );
                return AlarmDecision::no_trigger(DecisionBasis::TableLookupFailed);
            }
        };

        let trigger = snapshot.object_distance_m <= stopping_distance_m;

        AlarmDecision {
            trigger,
            basis: DecisionBasis::DistanceCompared,
            road_condition: Some(condition),
            speed_bracket_kmh: Some(bracket),
            stopping_distance_m: Some(stopping_distance_m),
        }
    }

    /// The table this engine evaluates against
    pub fn table(&self) -> &StoppingDistanceTable {
        &self.table
    }

    /// The tuning constants in effect
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Round a speed to the nearest bracket step.
///
/// `f64::round` rounds half away from zero, which on the non-negative
/// speed domain is the required half-up behavior: 45.0 -> 50, 95.0 -> 100.
fn round_to_bracket_step(speed_kmh: f64) -> f64 {
    (speed_kmh / BRACKET_STEP_KMH).round() * BRACKET_STEP_KMH
}
