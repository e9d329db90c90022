//! Build Use Case
//!
//! Runs the publishing pipeline strictly in sequence:
//! 1. Sync notes (this binary's `sync` subcommand, captured)
//! 2. Build the site (`zola build`, captured)
//! 3. Optionally serve the site (`zola serve`, attached until interrupted)
//! 4. Optionally watch-sync (`sync --watch`, attached until interrupted)
//!
//! A failure in step 1 or 2 stops the pipeline.

mod options;
mod use_case;


pub use options::{BuildEvent, BuildOptions, BuildOutcome, BuildStep};
pub use use_case::BuildUseCase;
