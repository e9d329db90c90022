//! Sync Report
//!
//! Result types for a single sync run.

use std::path::PathBuf;

use serde::Serialize;

/// A note that was converted and written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncedFile {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl SyncedFile {
    /// File name shown to the user
    pub fn name(&self) -> String {
        file_name(&self.source)
    }
}

/// Where a per-file failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    /// A folder or entry below the publish folder could not be listed
    List,
    Read,
    Write,
}

/// A note that could not be synced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncFailure {
    /// File name of the note
    pub file: String,
    pub path: PathBuf,
    pub stage: FailureStage,
    pub message: String,
}

/// Result of a sync run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub publish_dir: PathBuf,
    pub content_dir: PathBuf,
    /// The publish folder did not exist and was created empty
    pub created_publish_folder: bool,
    pub synced: Vec<SyncedFile>,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    pub fn new(publish_dir: impl Into<PathBuf>, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            publish_dir: publish_dir.into(),
            content_dir: content_dir.into(),
            ..Self::default()
        }
    }

    /// Number of notes written successfully
    pub fn synced_count(&self) -> usize {
        self.synced.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub(crate) fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
