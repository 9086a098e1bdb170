//! Emission event records

use alarm_emission::EmissionOutcome;
use chrono::{DateTime, Utc};
use decision_engine::AlarmDecision;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// One triggering decision that reached the emission guard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmEvent {
    /// Unique event id
    pub id: Uuid,

    /// Wall-clock time the event was recorded
    pub timestamp: DateTime<Utc>,

    /// The decision that triggered
    pub decision: AlarmDecision,

    /// Whether the guard granted the emission
    pub emission: EmissionOutcome,
}

impl AlarmEvent {
    pub(crate) fn record(decision: AlarmDecision, emission: EmissionOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            decision,
            emission,
        }
    }
}

/// Bounded sliding window of recent events, oldest dropped first
#[derive(Debug)]
pub(crate) struct EventLog {
    data: VecDeque<AlarmEvent>,
    capacity: usize,
}

impl EventLog {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, event: AlarmEvent) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(event);
    }

    pub(crate) fn snapshot(&self) -> Vec<AlarmEvent> {
        self.data.iter().cloned().collect()
    }
}
