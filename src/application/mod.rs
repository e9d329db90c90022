//! Application Layer
//!
//! Use cases that orchestrate the publishing flow.
//! This layer:
//! - Depends on Domain layer (services, ports, value objects)
//! - Does NOT contain conversion rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncUseCase` - Converts every note in the publish folder into a Zola page
//! - `WatchUseCase` - Re-runs the sync when notes change, debounced
//! - `BuildUseCase` - Sync step, site build, then optional serve / watch-sync

pub mod build;
pub mod sync;
pub mod watch;

pub use build::{BuildEvent, BuildOptions, BuildOutcome, BuildStep, BuildUseCase};
pub use sync::{FailureStage, SyncFailure, SyncOptions, SyncReport, SyncUseCase, SyncedFile};
pub use watch::{ChangeKind, ChangeSignal, Debouncer, WatchEvent, WatchOptions, WatchUseCase};
