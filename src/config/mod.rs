//! Configuration module for vaultpress
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (VAULTPRESS_*)
//! 3. Project config (./vaultpress.toml)
//! 4. User config (~/.config/vaultpress/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, SyncConfig, VaultConfig, WatchConfig};
