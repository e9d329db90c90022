//! Terminal presentation for the `vaultpress` binary
//!
//! Human output goes to stdout (errors to stderr). With `--json`, every event is
//! written as one JSON object per line instead.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
