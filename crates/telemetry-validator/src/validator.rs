//! Telemetry Validator for Range Checking

use crate::error::TelemetryError;
use decision_engine::TelemetrySnapshot;
use serde::{Deserialize, Serialize};

/// Validation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Speed plausibility range (km/h)
    pub speed_range: (f64, f64),
    /// Object distance plausibility range (m)
    pub distance_range: (f64, f64),
    /// Visibility upper bound (m); the lower bound is strictly positive
    pub visibility_max_m: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            speed_range: (0.0, 300.0),
            distance_range: (0.0, 500.0),
            visibility_max_m: 10_000.0,
        }
    }
}

/// Result of validating one snapshot
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether every field passed
    pub valid: bool,
    /// Errors for the fields that failed
    pub errors: Vec<TelemetryError>,
    /// Number of fields checked
    pub fields_checked: usize,
}

/// Validator applied at the collaborator boundary
pub struct TelemetryValidator {
    config: ValidationConfig,
}

impl TelemetryValidator {
    /// Create a validator with the given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against an inclusive range
    fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), TelemetryError> {
        if !value.is_finite() {
            return Err(TelemetryError::NonFinite { field });
        }
        if value < range.0 || value > range.1 {
            return Err(TelemetryError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            });
        }
        Ok(())
    }

    /// Validate ground speed
    pub fn validate_speed(&self, speed_kmh: f64) -> Result<(), TelemetryError> {
        self.validate_range("current_speed_kmh", speed_kmh, self.config.speed_range)
    }

    /// Validate detected-object distance
    pub fn validate_distance(&self, distance_m: f64) -> Result<(), TelemetryError> {
        self.validate_range("object_distance_m", distance_m, self.config.distance_range)
    }

    /// Validate visibility; must be strictly positive
    pub fn validate_visibility(&self, visibility_m: f64) -> Result<(), TelemetryError> {
        if !visibility_m.is_finite() {
            return Err(TelemetryError::NonFinite {
                field: "visibility_m",
            });
        }
        if visibility_m <= 0.0 {
            return Err(TelemetryError::NonPositive {
                field: "visibility_m",
                value: visibility_m,
            });
        }
        if visibility_m > self.config.visibility_max_m {
            return Err(TelemetryError::OutOfRange {
                field: "visibility_m",
                value: visibility_m,
                min: 0.0,
                max: self.config.visibility_max_m,
            });
        }
        Ok(())
    }

    /// Validate a whole snapshot, collecting every failure
    pub fn validate(&self, snapshot: &TelemetrySnapshot) -> ValidationReport {
        let checks = [
            self.validate_speed(snapshot.current_speed_kmh),
            self.validate_distance(snapshot.object_distance_m),
            self.validate_visibility(snapshot.visibility_m),
        ];

        let fields_checked = checks.len();
        let errors: Vec<TelemetryError> = checks
            .into_iter()
            .filter_map(|check| check.err())
            .collect();

        ValidationReport {
            valid: errors.is_empty(),
            errors,
            fields_checked,
        }
    }
}

impl Default for TelemetryValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
