//! Error types for vaultpress
//!
//! Library code returns `VaultPressResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vaultpress operations
pub type VaultPressResult<T> = Result<T, VaultPressError>;

/// Main error type for vaultpress operations
#[derive(Error, Debug)]
pub enum VaultPressError {
    /// An explicitly requested vault path does not exist
    #[error("vault path {} does not exist", path.display())]
    VaultNotFound { path: PathBuf },

    /// No vault could be discovered by searching
    #[error("could not find an Obsidian vault (searched from {}); specify one with --vault", start.display())]
    VaultNotDiscovered { start: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error outside of per-file processing
    #[error("{0}")]
    FileSystem(#[from] crate::domain::ports::FsError),

    /// Invalid configuration file
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// The publish folder could not be observed
    #[error("cannot watch {}: {message}", path.display())]
    WatchSetup { path: PathBuf, message: String },

    /// An external command could not be started
    #[error("failed to start '{program}': {message}")]
    CommandSpawn { program: String, message: String },
}

impl VaultPressError {
    /// True for locator failures (explicit path missing or discovery failed)
    pub fn is_vault_missing(&self) -> bool {
        matches!(
            self,
            VaultPressError::VaultNotFound { .. } | VaultPressError::VaultNotDiscovered { .. }
        )
    }
}
