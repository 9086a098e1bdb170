//! Braking-Alarm Decision Engine
//!
//! Pure evaluation of driving telemetry against the stopping-distance table:
//! - Fast-path suppression when no object is in view or the vehicle is
//!   near-stationary
//! - Road condition derived from visibility
//! - Observed speed rounded to the nearest bracket step, then resolved
//!   against the table
//! - Trigger when the object sits at or within the stopping distance
//!
//! The engine holds no mutable state; identical snapshots always produce
//! identical decisions.

mod config;
mod decision;
mod engine;
mod telemetry;

pub use config::EngineConfig;
pub use decision::{AlarmDecision, DecisionBasis};
pub use engine::DecisionEngine;
pub use telemetry::{TelemetrySnapshot, DEFAULT_VISIBILITY_M};
