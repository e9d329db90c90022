//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and home directory resolution
//! - `vault` - Obsidian vault discovery
//! - `process` - External command execution

pub mod fs;
pub mod process;
pub mod vault;

// Re-export for convenience
pub use fs::{expand_home, vaultpress_home_dir, LocalFs, VAULTPRESS_TEST_HOME_VAR};
pub use process::SystemCommandRunner;
pub use vault::{VaultLocator, DEFAULT_VAULT_MARKER};
