//! Markdown extension filter

use std::path::Path;

/// Set of file extensions treated as markdown notes (without the leading dot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExtensions(Vec<String>);

impl MarkdownExtensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exts = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self(exts)
    }

    /// Whether `path` ends in one of the configured extensions.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.0.iter().any(|candidate| candidate == ext))
            .unwrap_or(false)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for MarkdownExtensions {
    fn default() -> Self {
        Self(vec!["md".to_string()])
    }
}
