//! Alarm Emission Gating
//!
//! Rate-limits physical alarm playback independent of evaluation cadence:
//! - One mutable timestamp behind `try_emit`, the core's only state
//! - Mutex-wrapped shared handle for concurrent evaluation paths
//! - Playback collaborator contract with a primary-to-fallback chain

mod guard;
mod playback;

pub use guard::{EmissionGuard, EmissionOutcome, GuardConfig, SharedEmissionGuard};
pub use playback::{AlarmPlayback, FallbackPlayback, LogPlayback, PlaybackError};
