//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{VaultPressError, VaultPressResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the site root
pub const PROJECT_CONFIG_FILE: &str = "vaultpress.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> VaultPressResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| VaultPressError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// A config file that exists but does not parse is an error; a missing one is not.
pub fn load_or_default(project_root: Option<&Path>) -> VaultPressResult<(Config, Vec<ConfigWarning>)> {
    let candidates = [
        project_root.map(|root| root.join(PROJECT_CONFIG_FILE)),
        dirs::config_dir().map(|dir| dir.join("vaultpress").join("config.toml")),
    ];

    for candidate in candidates.into_iter().flatten() {
        if candidate.is_file() {
            tracing::debug!(config = %candidate.display(), "loading configuration");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (VAULTPRESS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // VAULTPRESS_VAULT
    if let Some(vault) = get_env("VAULTPRESS_VAULT").filter(|v| !v.is_empty()) {
        config.vault.path = Some(PathBuf::from(vault));
    }

    // VAULTPRESS_CONTENT
    if let Some(content) = get_env("VAULTPRESS_CONTENT").filter(|v| !v.is_empty()) {
        config.sync.content = PathBuf::from(content);
    }

    // VAULTPRESS_INTERVAL (seconds)
    if let Some(interval) = get_env("VAULTPRESS_INTERVAL") {
        match interval.trim().parse::<u64>() {
            Ok(secs) => config.watch.interval_secs = secs,
            Err(_) => tracing::warn!(value = %interval, "ignoring invalid VAULTPRESS_INTERVAL"),
        }
    }

    // VAULTPRESS_NO_COLOR
    if let Some(val) = get_env("VAULTPRESS_NO_COLOR") {
        if val != "0" && val.to_lowercase() != "false" {
            config.output.color = ColorMode::Never;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "vault",
        "path",
        "marker",
        "publish_folder",
        "sync",
        "content",
        "extensions",
        "watch",
        "interval_secs",
        "build",
        "command",
        "serve_command",
        "output_dir",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
