use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use crate::sensor::SampleWindow;
/// Default number of recordings kept in the session.
pub const LOG_CAPACITY: usize = 5;
/// Immutable snapshot of the sample window.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recording {
    id: Uuid,
    created_at: DateTime<Utc>,
    samples: Vec<f64>,
}
impl Recording {
    /// Copies the window, so later ticks never reach the saved samples.
    pub fn capture(window: &SampleWindow) -> Self {
        Self::from_parts(Uuid::new_v4(), Utc::now(), window.snapshot())
    }
    pub fn from_parts(id: Uuid, created_at: DateTime<Utc>, samples: Vec<f64>) -> Self {
        Self {
            id,
            created_at,
            samples,
        }
    }
    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, v| acc.max(v.abs()))
    }
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self.samples.iter().map(|v| v * v).sum();
        (sum_sq / self.samples.len() as f64).sqrt()
    }
}
/// Newest-first list of recordings with a hard length cap.
#[derive(Clone, Debug)]
pub struct RecordingLog {
    entries: Vec<Recording>,
    capacity: usize,
}
impl RecordingLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }
    pub fn capture(&self, window: &SampleWindow) -> Recording {
        Recording::capture(window)
    }
    /// Prepends; evicts the oldest entry once over capacity.
    pub fn add(&mut self, recording: Recording) {
        self.entries.insert(0, recording);
        if self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop() {
                log::debug!("recording {} evicted from log", evicted.id());
            }
        }
    }
    pub fn list(&self) -> &[Recording] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
impl Default for RecordingLog {
    fn default() -> Self {
        Self::new(LOG_CAPACITY)
    }
}
