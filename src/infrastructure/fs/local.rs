//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::file_system::{FileListing, FileSystem, FsError, FsResult};

use super::home::vaultpress_home_dir;

/// Local file system implementation
///
/// Provides atomic writes and a sorted recursive file listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))?;

        // Temp file in the same directory so the rename stays on one filesystem
        let mut tmp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(e, parent))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::from_io(e, path))?;
        tmp.persist(path)
            .map_err(|e| FsError::from_io(e.error, path))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(e, path))
    }

    fn list_files(&self, root: &Path) -> FsResult<FileListing> {
        if !root.is_dir() {
            return Err(FsError::NotFound(root.to_path_buf()));
        }

        // Symlinked directories are not descended into
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        let mut listing = FileListing::default();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    let is_file = match entry.file_type() {
                        Some(t) if t.is_symlink() => entry.path().is_file(),
                        Some(t) => t.is_file(),
                        None => false,
                    };
                    if is_file {
                        listing.files.push(entry.into_path());
                    }
                }
                Err(err) => {
                    let path = error_path(&err).unwrap_or(root).to_path_buf();
                    tracing::warn!(path = %path.display(), error = %err, "cannot read entry");
                    listing.unreadable.push((path, err.to_string()));
                }
            }
        }
        listing.files.sort();
        Ok(listing)
    }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}

/// Expand a leading `~` to the home directory. Other paths are returned as-is.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match vaultpress_home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
