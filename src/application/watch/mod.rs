//! Watch Use Case
//!
//! Keeps the Zola content directory current while notes are edited:
//! - File system monitoring of the publish folder (via `notify` crate)
//! - Observer callbacks only forward timestamped signals into a channel
//! - A sequential loop drains the channel and re-runs the full sync,
//!   at most once per debounce interval
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(sync, WatchOptions::default());
//! use_case.start(running, |event| { ... })?;
//! ```

mod debounce;
mod event;
mod use_case;


pub use debounce::Debouncer;
pub use event::{ChangeKind, ChangeSignal, WatchEvent, WatchOptions, DEFAULT_INTERVAL};
pub use use_case::WatchUseCase;
