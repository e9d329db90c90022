//! Sync Options

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::value_objects::MarkdownExtensions;

/// Options for the sync use case
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Vault root (the directory holding `.obsidian`)
    pub vault: PathBuf,
    /// Zola content directory that receives the pages
    pub content: PathBuf,
    /// Name of the publish folder inside the vault
    pub publish_folder: String,
    /// Which files count as notes
    pub extensions: MarkdownExtensions,
}

impl SyncOptions {
    pub fn new(vault: impl Into<PathBuf>, content: impl Into<PathBuf>) -> Self {
        Self {
            vault: vault.into(),
            content: content.into(),
            publish_folder: "publish".to_string(),
            extensions: MarkdownExtensions::default(),
        }
    }

    /// Options taking folder name and extensions from configuration.
    pub fn from_config(
        vault: impl Into<PathBuf>,
        content: impl Into<PathBuf>,
        config: &Config,
    ) -> Self {
        Self::new(vault, content)
            .with_publish_folder(config.vault.publish_folder.clone())
            .with_extensions(config.extensions())
    }

    pub fn with_publish_folder(mut self, name: impl Into<String>) -> Self {
        self.publish_folder = name.into();
        self
    }

    pub fn with_extensions(mut self, extensions: MarkdownExtensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// `<vault>/<publish_folder>`
    pub fn publish_dir(&self) -> PathBuf {
        self.vault.join(&self.publish_folder)
    }
}
