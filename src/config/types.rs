//! Configuration types

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::loader::{self, ConfigWarning};
use crate::domain::ports::CommandSpec;
use crate::domain::value_objects::MarkdownExtensions;
use crate::error::VaultPressResult;
use crate::infrastructure::vault::DEFAULT_VAULT_MARKER;

/// Vault configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Explicit vault root; discovery is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default = "default_publish_folder")]
    pub publish_folder: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            path: None,
            marker: default_marker(),
            publish_folder: default_publish_folder(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_VAULT_MARKER.to_string()
}

fn default_publish_folder() -> String {
    "publish".to_string()
}

/// Sync configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Zola content directory
    #[serde(default = "default_content")]
    pub content: PathBuf,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            extensions: default_extensions(),
        }
    }
}

fn default_content() -> PathBuf {
    PathBuf::from("content")
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

/// Watch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Minimum seconds between two syncs triggered by file events
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    1
}

/// Site build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_build_command")]
    pub command: Vec<String>,

    #[serde(default = "default_serve_command")]
    pub serve_command: Vec<String>,

    /// Where the site generator writes the built site
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: default_build_command(),
            serve_command: default_serve_command(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_build_command() -> Vec<String> {
    vec!["zola".to_string(), "build".to_string()]
}

fn default_serve_command() -> Vec<String> {
    vec!["zola".to_string(), "serve".to_string()]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub vault: VaultConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> VaultPressResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> VaultPressResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply env overrides
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> VaultPressResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (VAULTPRESS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn extensions(&self) -> MarkdownExtensions {
        MarkdownExtensions::new(&self.sync.extensions)
    }

    pub fn watch_interval(&self) -> Duration {
        Duration::from_secs(self.watch.interval_secs)
    }

    pub fn build_command(&self) -> Option<CommandSpec> {
        CommandSpec::from_argv(&self.build.command)
    }

    pub fn serve_command(&self) -> Option<CommandSpec> {
        CommandSpec::from_argv(&self.build.serve_command)
    }
}
