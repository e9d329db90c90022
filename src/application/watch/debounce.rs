//! Debounce state for the watch loop

use std::time::{Duration, Instant};

/// Allows a sync when none has run yet, or when strictly more than
/// `interval` has passed since the last one. Dropped signals are not queued.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    last_sync: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_sync: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_sync(&self) -> Option<Instant> {
        self.last_sync
    }

    pub fn should_sync(&self, now: Instant) -> bool {
        match self.last_sync {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.interval,
        }
    }

    pub fn record_sync(&mut self, at: Instant) {
        self.last_sync = Some(at);
    }
}
