//! Telemetry Validation
//!
//! Boundary validation for driving telemetry before it reaches the pure
//! decision engine. Malformed input is a caller contract violation and is
//! rejected here with a typed error, never clamped or silently defaulted.

mod error;
mod validator;

pub use error::TelemetryError;
pub use validator::{TelemetryValidator, ValidationConfig, ValidationReport};
