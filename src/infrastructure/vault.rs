//! Obsidian vault discovery
//!
//! A vault is any directory holding the app's configuration folder
//! (`.obsidian`). Resolution order:
//!
//! 1. An explicit path, which must exist. No search happens when one is given.
//! 2. The start directory (home by default) and each of its ancestors.
//! 3. Direct children of a few well-known folders under home.

use std::path::{Path, PathBuf};

use crate::error::{VaultPressError, VaultPressResult};

use super::fs::{expand_home, vaultpress_home_dir};

/// Marker folder that identifies a vault root
pub const DEFAULT_VAULT_MARKER: &str = ".obsidian";

/// Folders under home whose direct children are checked for a vault
pub const COMMON_VAULT_PARENTS: &[&str] = &["Documents", "Desktop", "vault", "Obsidian"];

/// Locates the vault root on disk. Never creates or modifies anything.
#[derive(Debug, Clone)]
pub struct VaultLocator {
    home: Option<PathBuf>,
    start: Option<PathBuf>,
    marker: String,
}

impl Default for VaultLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultLocator {
    /// Locator rooted at the current user's home directory.
    pub fn new() -> Self {
        Self {
            home: vaultpress_home_dir(),
            start: None,
            marker: DEFAULT_VAULT_MARKER.to_string(),
        }
    }

    /// Use a different home directory (also moves the default start).
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Start the upward search somewhere other than home.
    pub fn with_start(mut self, start: impl Into<PathBuf>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Resolve the vault root.
    pub fn locate(&self, explicit: Option<&Path>) -> VaultPressResult<PathBuf> {
        if let Some(path) = explicit {
            let path = expand_home(path);
            return if path.exists() {
                tracing::debug!(vault = %path.display(), "using explicit vault path");
                Ok(path)
            } else {
                Err(VaultPressError::VaultNotFound { path })
            };
        }

        let start = self.start.clone().or_else(|| self.home.clone());

        if let Some(start) = &start {
            if let Some(found) = self.search_ancestors(start) {
                return Ok(found);
            }
        }

        if let Some(found) = self.search_common_locations() {
            return Ok(found);
        }

        Err(VaultPressError::VaultNotDiscovered {
            start: start.unwrap_or_default(),
        })
    }

    fn is_vault(&self, dir: &Path) -> bool {
        dir.join(&self.marker).exists()
    }

    fn search_ancestors(&self, start: &Path) -> Option<PathBuf> {
        let found = start.ancestors().find(|dir| self.is_vault(dir))?;
        tracing::debug!(vault = %found.display(), "found vault by upward search");
        Some(found.to_path_buf())
    }

    fn search_common_locations(&self) -> Option<PathBuf> {
        let home = self.home.as_ref()?;

        for parent in COMMON_VAULT_PARENTS {
            let location = home.join(parent);
            let Ok(entries) = std::fs::read_dir(&location) else {
                continue;
            };

            let mut children: Vec<PathBuf> = entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_dir())
                .collect();
            children.sort();

            if let Some(found) = children.into_iter().find(|child| self.is_vault(child)) {
                tracing::debug!(vault = %found.display(), "found vault in common location");
                return Some(found);
            }
        }

        None
    }
}
