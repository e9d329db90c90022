//! Sync Use Case
//!
//! One full pass over the vault's publish folder:
//! - Create the content directory (and the publish folder on first run)
//! - Enumerate markdown notes in lexicographic path order
//! - Convert each note and write it flat into the content directory
//!
//! A failure on one note is recorded in the report and never stops the run.

mod options;
mod result;
mod use_case;

#[cfg(test)]
mod tests;

pub use options::SyncOptions;
pub use result::{FailureStage, SyncFailure, SyncReport, SyncedFile};
pub use use_case::SyncUseCase;
