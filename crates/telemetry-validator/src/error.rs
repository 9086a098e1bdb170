//! Telemetry Error Types

use thiserror::Error;

/// Errors raised during telemetry validation
#[derive(Debug, Clone, Error)]
pub enum TelemetryError {
    /// Value outside its plausibility range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite value
    #[error("{field} value is not a finite number")]
    NonFinite { field: &'static str },

    /// Value required to be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}
