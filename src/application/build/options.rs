//! Build options, steps and events

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::ports::CommandSpec;

/// Options for the build use case
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub sync_command: CommandSpec,
    pub build_command: CommandSpec,
    /// Dev server, run after a successful build when set
    pub serve_command: Option<CommandSpec>,
    /// Watch-sync, run after the dev server returns when set
    pub watch_command: Option<CommandSpec>,
    /// Where the built site ends up, reported after the build
    pub output_dir: PathBuf,
}

impl BuildOptions {
    pub fn new(sync_command: CommandSpec, build_command: CommandSpec) -> Self {
        Self {
            sync_command,
            build_command,
            serve_command: None,
            watch_command: None,
            output_dir: PathBuf::from("public"),
        }
    }

    pub fn with_serve(mut self, command: CommandSpec) -> Self {
        self.serve_command = Some(command);
        self
    }

    pub fn with_watch(mut self, command: CommandSpec) -> Self {
        self.watch_command = Some(command);
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// A pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStep {
    Sync,
    Build,
    Serve,
    WatchSync,
}

impl BuildStep {
    pub fn description(&self) -> &'static str {
        match self {
            BuildStep::Sync => "Syncing from Obsidian",
            BuildStep::Build => "Building Zola site",
            BuildStep::Serve => "Development server",
            BuildStep::WatchSync => "Watch sync",
        }
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Build event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuildEvent {
    StepStarted {
        step: BuildStep,
        command: String,
    },
    StepSucceeded {
        step: BuildStep,
        stdout: String,
    },
    StepFailed {
        step: BuildStep,
        message: String,
        stderr: String,
    },
    SiteBuilt {
        output_dir: PathBuf,
    },
    /// A blocking step returned (usually after Ctrl+C)
    StepStopped {
        step: BuildStep,
    },
}

impl BuildEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Final result of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failed { step: BuildStep },
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Success)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            BuildOutcome::Success => 0,
            BuildOutcome::Failed { .. } => 1,
        }
    }
}
