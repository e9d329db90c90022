//! vaultpress - publish Obsidian notes to a Zola site
//!
//! Notes placed in a vault's `publish` folder are converted into Zola pages:
//! the leading `# Heading` becomes a TOML frontmatter title and the page is
//! stamped with the publish date. The folder can be watched to keep the site
//! content current, and a build pipeline chains sync, `zola build` and
//! optionally `zola serve`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    BuildEvent, BuildOptions, BuildOutcome, BuildStep, BuildUseCase, SyncOptions, SyncReport,
    SyncUseCase, WatchEvent, WatchOptions, WatchUseCase,
};
pub use config::Config;
pub use domain::services::{convert, fallback_title, DEFAULT_TITLE};
pub use error::{VaultPressError, VaultPressResult};
pub use infrastructure::{LocalFs, SystemCommandRunner, VaultLocator};
