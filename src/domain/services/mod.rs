//! Domain Services
//!
//! Pure business logic with no I/O dependencies.

mod converter;

pub use converter::{convert, fallback_title, DEFAULT_TITLE};
