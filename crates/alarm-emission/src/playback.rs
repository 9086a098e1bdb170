//! Playback collaborator contract

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Playback failure reported by an audio/haptic collaborator
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    /// Alarm sound resource missing or undecodable
    #[error("alarm sound unavailable: {0}")]
    SoundUnavailable(String),

    /// Audio output could not be acquired
    #[error("audio output busy: {0}")]
    OutputBusy(String),
}

/// Audio/haptic collaborator invoked for a granted emission.
///
/// Playback results never feed back into the emission guard: by the time
/// this is called the grant has already been recorded.
pub trait AlarmPlayback: Send + Sync {
    fn play_alarm(&self) -> Result<(), PlaybackError>;
}

/// Sink that only logs; the built-in fallback and a test stand-in
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPlayback;

impl AlarmPlayback for LogPlayback {
    fn play_alarm(&self) -> Result<(), PlaybackError> {
        info!("Alarm emitted");
        Ok(())
    }
}

/// Primary sink chained with a simpler fallback.
///
/// A granted emission must never be silently dropped: when the primary
/// sink fails, the failure is logged and the fallback attempted. Only a
/// double failure surfaces to the caller.
pub struct FallbackPlayback {
    primary: Arc<dyn AlarmPlayback>,
    fallback: Arc<dyn AlarmPlayback>,
}

impl FallbackPlayback {
    /// Chain a primary sink with an explicit fallback
    pub fn new(primary: Arc<dyn AlarmPlayback>, fallback: Arc<dyn AlarmPlayback>) -> Self {
        Self { primary, fallback }
    }

    /// Chain a primary sink with the logging fallback
    pub fn with_log_fallback(primary: Arc<dyn AlarmPlayback>) -> Self {
        Self::new(primary, Arc::new(LogPlayback))
    }
}

impl AlarmPlayback for FallbackPlayback {
    fn play_alarm(&self) -> Result<(), PlaybackError> {
        match self.primary.play_alarm() {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("Primary alarm playback failed, using fallback: {}", err);
                self.fallback.play_alarm()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingPlayback {
        plays: AtomicUsize,
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

    #[test]
    fn test_primary_success_skips_fallback() {
        let primary = Arc::new(CountingPlayback::default());
        let fallback = Arc::new(CountingPlayback::default());
        let chain = FallbackPlayback::new(primary.clone(), fallback.clone());

        assert!(chain.play_alarm().is_ok());
        assert_eq!(primary.plays.load(Ordering::SeqCst), 1);
        assert_eq!(fallback.plays.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_primary_failure_engages_fallback() {
        let fallback = Arc::new(CountingPlayback::default());
        let chain = FallbackPlayback::new(Arc::new(FailingPlayback), fallback.clone());

        assert!(chain.play_alarm().is_ok());
        assert_eq!(fallback.plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_double_failure_surfaces() {
        let chain = FallbackPlayback::new(Arc::new(FailingPlayback), Arc::new(FailingPlayback));
        assert!(matches!(
            chain.play_alarm(),
            Err(PlaybackError::SoundUnavailable(_))
        ));
    }
}
