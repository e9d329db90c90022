//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so integration tests point
//! vault discovery at a temp directory through `VAULTPRESS_TEST_HOME` instead.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const VAULTPRESS_TEST_HOME_VAR: &str = "VAULTPRESS_TEST_HOME";

/// Get the home directory used for vault discovery and `~` expansion.
///
/// - `Some(PathBuf)` - `VAULTPRESS_TEST_HOME` if set, else the system home
/// - `None` - neither is available
pub fn vaultpress_home_dir() -> Option<PathBuf> {
    std::env::var(VAULTPRESS_TEST_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
