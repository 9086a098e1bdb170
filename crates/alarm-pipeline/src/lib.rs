//! Braking Alarm Pipeline
//!
//! Composition root wiring the braking-alarm core end to end:
//! validation -> decision evaluation -> emission gating -> playback.
//!
//! The pipeline owns the only mutable state (the emission guard and a
//! bounded event log); evaluation itself stays pure. An async feed loop
//! consumes telemetry snapshots from an mpsc channel at whatever cadence
//! the detection pipeline produces them.

mod events;
mod settings;

pub use events::AlarmEvent;
pub use settings::{PipelineSettings, SettingsError};

use alarm_emission::{AlarmPlayback, EmissionOutcome, PlaybackError, SharedEmissionGuard};
use decision_engine::{AlarmDecision, DecisionEngine, TelemetrySnapshot};
use events::EventLog;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use stopping_distance::StoppingDistanceTable;
use telemetry_validator::{TelemetryError, TelemetryValidator};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Pipeline error types
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Telemetry rejected at the boundary; the evaluator never saw it
    #[error("telemetry rejected: {0:?}")]
    InvalidTelemetry(Vec<TelemetryError>),

    /// Playback failed for a granted emission, fallback included
    #[error("alarm playback failed: {0}")]
    Playback(#[from] PlaybackError),
}

/// Result of pushing one snapshot through the pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineOutcome {
    /// The evaluated decision
    pub decision: AlarmDecision,

    /// Guard outcome; `None` when the decision did not trigger
    pub emission: Option<EmissionOutcome>,
}

/// End-to-end alarm pipeline
pub struct AlarmPipeline {
    validator: TelemetryValidator,
    engine: DecisionEngine,
    guard: SharedEmissionGuard,
    playback: Arc<dyn AlarmPlayback>,
    history: Mutex<EventLog>,
}

impl AlarmPipeline {
    /// Pipeline over the reference stopping-distance table
    pub fn new(settings: PipelineSettings, playback: Arc<dyn AlarmPlayback>) -> Self {
        Self::with_table(settings, StoppingDistanceTable::reference(), playback)
    }

    /// Pipeline over a custom stopping-distance table
    pub fn with_table(
        settings: PipelineSettings,
        table: StoppingDistanceTable,
        playback: Arc<dyn AlarmPlayback>,
    ) -> Self {
        info!("Creating alarm pipeline with settings: {:?}", settings);
        Self {
            validator: TelemetryValidator::new(settings.validation),
            engine: DecisionEngine::new(table, settings.engine),
            guard: SharedEmissionGuard::new(settings.guard),
            playback,
            history: Mutex::new(EventLog::new(settings.history_capacity)),
        }
    }

    /// Process one snapshot at the current instant
    pub fn process(&self, snapshot: &TelemetrySnapshot) -> Result<PipelineOutcome, PipelineError> {
        self.process_at(snapshot, Instant::now())
    }

    /// Process one snapshot at an explicit instant.
    ///
    /// Validation failures reject the snapshot before evaluation. A
    /// triggering decision is pushed through the emission guard and, when
    /// granted, handed to the playback collaborator; the grant stands even
    /// if playback then fails.
    pub fn process_at(
        &self,
        snapshot: &TelemetrySnapshot,
        now: Instant,
    ) -> Result<PipelineOutcome, PipelineError> {
        let report = self.validator.validate(snapshot);
        if !report.valid {
            return Err(PipelineError::InvalidTelemetry(report.errors));
        }

        let decision = self.engine.evaluate(snapshot);
        if !decision.trigger {
            return Ok(PipelineOutcome {
                decision,
                emission: None,
            });
        }

        let emission = self.guard.try_emit(now);
        self.lock_history().push(AlarmEvent::record(decision, emission));

        if emission == EmissionOutcome::Granted {
            self.playback.play_alarm()?;
        }

        Ok(PipelineOutcome {
            decision,
            emission: Some(emission),
        })
    }

    /// Feed loop consuming snapshots from a channel.
    ///
    /// Rejected telemetry and playback failures are logged and the loop
    /// keeps running; it ends when the sender side closes.
    pub async fn run(&self, mut rx: mpsc::Receiver<TelemetrySnapshot>) {
        info!("Alarm pipeline feed loop started");
        while let Some(snapshot) = rx.recv().await {
            match self.process(&snapshot) {
                Ok(outcome) => {
                    debug!(
                        "Processed snapshot: trigger={} emission={:?}",
                        outcome.decision.trigger, outcome.emission
                    );
                }
                Err(err) => warn!("Snapshot dropped: {}", err),
            }
        }
        info!("Alarm pipeline feed loop finished");
    }

    /// Recent emission events, oldest first
    pub fn recent_events(&self) -> Vec<AlarmEvent> {
        self.lock_history().snapshot()
    }

    /// The decision engine in use
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    fn lock_history(&self) -> MutexGuard<'_, EventLog> {
        match self.history.lock() {
            Ok(log) => log,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarm_emission::FallbackPlayback;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct CountingPlayback {
        plays: AtomicUsize,
    }

    impl CountingPlayback {
        fn count(&self) -> usize {
            self.plays.load(Ordering::SeqCst)
        }
    }

    impl AlarmPlayback for CountingPlayback {
        fn play_alarm(&self) -> Result<(), PlaybackError> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingPlayback;

    impl AlarmPlayback for FailingPlayback {
        fn play_alarm(&self) -> Result<(), PlaybackError> {
            Err(PlaybackError::SoundUnavailable("missing resource".into()))
        }
    }

    fn pipeline_with_counter() -> (AlarmPipeline, Arc<CountingPlayback>) {
        let playback = Arc::new(CountingPlayback::default());
        let pipeline = AlarmPipeline::new(PipelineSettings::default(), playback.clone());
        (pipeline, playback)
    }

    fn triggering_snapshot() -> TelemetrySnapshot {
        TelemetrySnapshot::new(true, 40.0, 62.0, 100.0)
    }

    #[test]
    fn test_trigger_grants_and_plays() {
        let (pipeline, playback) = pipeline_with_counter();

        let outcome = pipeline
            .process_at(&triggering_snapshot(), Instant::now())
            .unwrap();
        assert!(outcome.decision.trigger);
        assert_eq!(outcome.emission, Some(EmissionOutcome::Granted));
        assert_eq!(playback.count(), 1);
        assert_eq!(pipeline.recent_events().len(), 1);
    }

    #[test]
    fn test_cooldown_suppresses_repeat_trigger() {
        let (pipeline, playback) = pipeline_with_counter();
        let start = Instant::now();

        let first = pipeline.process_at(&triggering_snapshot(), start).unwrap();
        assert_eq!(first.emission, Some(EmissionOutcome::Granted));

        let second = pipeline
            .process_at(&triggering_snapshot(), start + Duration::from_secs(1))
            .unwrap();
        assert_eq!(second.emission, Some(EmissionOutcome::Suppressed));
        assert_eq!(playback.count(), 1);

        let third = pipeline
            .process_at(&triggering_snapshot(), start + Duration::from_millis(3_500))
            .unwrap();
        assert_eq!(third.emission, Some(EmissionOutcome::Granted));
        assert_eq!(playback.count(), 2);
        assert_eq!(pipeline.recent_events().len(), 3);
    }

    #[test]
    fn test_non_trigger_skips_the_guard() {
        let (pipeline, playback) = pipeline_with_counter();
        let start = Instant::now();

        let clear = TelemetrySnapshot::new(true, 50.0, 62.0, 100.0);
        let outcome = pipeline.process_at(&clear, start).unwrap();
        assert!(!outcome.decision.trigger);
        assert_eq!(outcome.emission, None);
        assert_eq!(playback.count(), 0);
        assert!(pipeline.recent_events().is_empty());

        // The guard was never touched, so a trigger right after still grants.
        let outcome = pipeline
            .process_at(&triggering_snapshot(), start + Duration::from_millis(1))
            .unwrap();
        assert_eq!(outcome.emission, Some(EmissionOutcome::Granted));
    }

    #[test]
    fn test_invalid_telemetry_rejected_before_evaluation() {
        let (pipeline, playback) = pipeline_with_counter();

        let malformed = TelemetrySnapshot::new(true, -5.0, 62.0, 100.0);
        let result = pipeline.process_at(&malformed, Instant::now());
        assert!(matches!(result, Err(PipelineError::InvalidTelemetry(_))));
        assert_eq!(playback.count(), 0);
        assert!(pipeline.recent_events().is_empty());
    }

    #[test]
    fn test_playback_fallback_chain() {
        let fallback = Arc::new(CountingPlayback::default());
        let chain = FallbackPlayback::new(Arc::new(FailingPlayback), fallback.clone());
        let pipeline = AlarmPipeline::new(PipelineSettings::default(), Arc::new(chain));

        let outcome = pipeline
            .process_at(&triggering_snapshot(), Instant::now())
            .unwrap();
        assert_eq!(outcome.emission, Some(EmissionOutcome::Granted));
        assert_eq!(fallback.count(), 1);
    }

    #[tokio::test]
    async fn test_feed_loop_processes_channel() {
        let (pipeline, playback) = pipeline_with_counter();
        let (tx, rx) = mpsc::channel(8);

        tx.send(triggering_snapshot()).await.unwrap();
        tx.send(TelemetrySnapshot::new(false, 0.0, 62.0, 100.0))
            .await
            .unwrap();
        tx.send(TelemetrySnapshot::new(true, -1.0, 62.0, 100.0))
            .await
            .unwrap();
        drop(tx);

        pipeline.run(rx).await;

        assert_eq!(playback.count(), 1);
        assert_eq!(pipeline.recent_events().len(), 1);
    }
}
