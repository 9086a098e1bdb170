//! Pipeline settings and file/environment loading

use alarm_emission::GuardConfig;
use config::{Config, Environment, File};
use decision_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use telemetry_validator::ValidationConfig;
use thiserror::Error;

/// Default capacity of the in-memory emission event log
const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Settings loading failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load pipeline settings: {0}")]
    Load(#[from] config::ConfigError),
}

/// Complete pipeline configuration.
///
/// Every section falls back to its defaults, so a settings file only
/// needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Decision engine tuning
    pub engine: EngineConfig,

    /// Telemetry plausibility ranges
    pub validation: ValidationConfig,

    /// Emission guard cooldown
    pub guard: GuardConfig,

    /// Capacity of the emission event log
    pub history_capacity: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            validation: ValidationConfig::default(),
            guard: GuardConfig::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl PipelineSettings {
    /// Load settings from an optional file layered under `ALARM`-prefixed
    /// environment variables (e.g. `ALARM__ENGINE__MINIMUM_SPEED_KMH`).
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings = builder
            .add_source(Environment::with_prefix("ALARM").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PipelineSettings::default();
        assert_eq!(settings.engine.visibility_threshold_m, 100.0);
        assert_eq!(settings.engine.minimum_speed_kmh, 15.0);
        assert_eq!(settings.guard.minimum_interval_ms, 3_000);
        assert_eq!(settings.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_load_without_sources_yields_defaults() {
        let settings = PipelineSettings::load(None).unwrap();
        assert_eq!(settings, PipelineSettings::default());
    }
}
