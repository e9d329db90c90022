pub mod build;
pub mod sync;

use std::path::Path;

use anyhow::Result;
use vaultpress::config::Config;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;

/// Rendering context for errors that escape a command.
///
/// Config problems may be the error being reported, so a config that fails to
/// load falls back to the defaults.
pub fn error_ui(json: bool, color: Option<ColorWhen>) -> UiContext {
    let config = std::env::current_dir()
        .ok()
        .and_then(|cwd| Config::load_or_default(Some(&cwd)).ok())
        .map(|(config, _)| config)
        .unwrap_or_default();
    UiContext::new(json, color, &config)
}

/// Load `vaultpress.toml` from `root` (or the user config), logging unknown keys.
fn load_config(root: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_or_default(Some(root))?;
    for warning in &warnings {
        match (&warning.line, &warning.suggestion) {
            (Some(line), Some(suggestion)) => tracing::warn!(
                "unknown config key '{}' in {}:{} (did you mean '{}'?)",
                warning.key,
                warning.file.display(),
                line,
                suggestion
            ),
            (Some(line), None) => tracing::warn!(
                "unknown config key '{}' in {}:{}",
                warning.key,
                warning.file.display(),
                line
            ),
            (None, _) => tracing::warn!(
                "unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            ),
        }
    }
    Ok(config)
}
