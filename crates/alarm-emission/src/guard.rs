//! Emission Guard Implementation

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

/// Emission guard configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Minimum spacing between granted emissions (milliseconds)
    pub minimum_interval_ms: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            minimum_interval_ms: 3_000,
        }
    }
}

/// Outcome of an emission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmissionOutcome {
    /// Cooldown clear; the attempt was recorded and playback may proceed
    Granted,
    /// Within the cooldown window; the caller must not play
    Suppressed,
}

/// Rate limiter for physical alarm emission.
///
/// Detection pipelines can produce trigger decisions many times per second;
/// this guard spaces the audible emissions. The timestamp of the last
/// granted emission is the only mutable state in the whole core, and only
/// `try_emit` writes it.
#[derive(Debug)]
pub struct EmissionGuard {
    minimum_interval: Duration,
    last_emission: Option<Instant>,
}

impl EmissionGuard {
    /// Create a guard with the given cooldown
    pub fn new(config: GuardConfig) -> Self {
        Self {
            minimum_interval: Duration::from_millis(config.minimum_interval_ms),
            last_emission: None,
        }
    }

    /// Attempt an emission at `now`.
    ///
    /// Grants when no emission has been recorded yet or the cooldown has
    /// fully elapsed (the boundary grants), recording `now`. Suppression
    /// leaves the recorded timestamp untouched, so a burst of triggers
    /// does not push the next grant further out.
    pub fn try_emit(&mut self, now: Instant) -> EmissionOutcome {
        if let Some(last) = self.last_emission {
            if now.duration_since(last) < self.minimum_interval {
                debug!(
                    "Alarm emission suppressed: within {:?} cooldown",
                    self.minimum_interval
                );
                return EmissionOutcome::Suppressed;
            }
        }
        self.last_emission = Some(now);
        EmissionOutcome::Granted
    }

    /// Timestamp of the last granted emission
    pub fn last_emission(&self) -> Option<Instant> {
        self.last_emission
    }

    /// Forget the last emission, e.g. on trip restart
    pub fn reset(&mut self) {
        self.last_emission = None;
    }
}

impl Default for EmissionGuard {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

/// Cloneable, thread-safe handle around an [`EmissionGuard`].
///
/// Concurrent evaluation paths (camera frames, manual test triggers) must
/// agree on a single read-compare-write of the timestamp; the mutex keeps
/// that section atomic so near-simultaneous triggers cannot both be granted.
#[derive(Debug, Clone, Default)]
pub struct SharedEmissionGuard {
    inner: Arc<Mutex<EmissionGuard>>,
}

impl SharedEmissionGuard {
    /// Create a shared guard with the given cooldown
    pub fn new(config: GuardConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(EmissionGuard::new(config))),
        }
    }

    /// Attempt an emission at `now`; see [`EmissionGuard::try_emit`]
    pub fn try_emit(&self, now: Instant) -> EmissionOutcome {
        self.lock().try_emit(now)
    }

    /// Timestamp of the last granted emission
    pub fn last_emission(&self) -> Option<Instant> {
        self.lock().last_emission()
    }

    /// Forget the last emission
    pub fn reset(&self) {
        self.lock().reset();
    }

    fn lock(&self) -> MutexGuard<'_, EmissionGuard> {
        // A poisoned guard still holds a valid timestamp; recover it.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
