//! FileSystem port - abstraction over file I/O operations
//!
//! The sync use case reads notes and writes pages only through this trait,
//! so per-file failures can be exercised without touching real permissions.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Build an `FsError` from an I/O error, keeping the offending path.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

/// Files found by a recursive listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListing {
    /// Regular files, including symlinks that resolve to one
    pub files: Vec<PathBuf>,
    /// Entries the walk could not read, with the reason
    pub unreadable: Vec<(PathBuf, String)>,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - in-memory fakes in tests
pub trait FileSystem {
    /// Read file content as a UTF-8 string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// List every regular file below `root`, recursively, in lexicographic path order.
    ///
    /// Fails only when `root` itself is missing. Unreadable entries below it are
    /// returned in the listing instead of being dropped.
    fn list_files(&self, root: &Path) -> FsResult<FileListing>;
}
