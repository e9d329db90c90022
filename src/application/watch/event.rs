//! Watch event types and options

use std::path::PathBuf;
use std::time::{Duration, Instant};

use notify::EventKind;

/// Default minimum time between two event-triggered syncs
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// How often the loop wakes up to check for cancellation
const DEFAULT_POLL: Duration = Duration::from_millis(100);

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Debounce interval
    pub interval: Duration,
    /// Channel poll timeout between cancellation checks
    pub poll: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            poll: DEFAULT_POLL,
        }
    }
}

impl WatchOptions {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Kind of file system change that can trigger a sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Modify,
    Remove,
}

impl ChangeKind {
    /// Map a notify event kind; access and unclassified events yield `None`.
    pub fn from_event_kind(kind: &EventKind) -> Option<Self> {
        match kind {
            EventKind::Create(_) => Some(ChangeKind::Create),
            EventKind::Modify(_) => Some(ChangeKind::Modify),
            EventKind::Remove(_) => Some(ChangeKind::Remove),
            EventKind::Access(_) | EventKind::Any | EventKind::Other => None,
        }
    }
}

/// A change observed under the publish folder, stamped when it was received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSignal {
    pub kind: ChangeKind,
    pub paths: Vec<PathBuf>,
    pub at: Instant,
}

impl ChangeSignal {
    pub fn new(kind: ChangeKind, path: impl Into<PathBuf>, at: Instant) -> Self {
        Self {
            kind,
            paths: vec![path.into()],
            at,
        }
    }

    pub fn from_event(event: &notify::Event, at: Instant) -> Option<Self> {
        let kind = ChangeKind::from_event_kind(&event.kind)?;
        Some(Self {
            kind,
            paths: event.paths.clone(),
            at,
        })
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        source: String,
    },
    FileChanged {
        path: String,
    },
    SyncStarted,
    FileFailed {
        file: String,
        message: String,
    },
    SyncComplete {
        synced: usize,
        failed: usize,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
