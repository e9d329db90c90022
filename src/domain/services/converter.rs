//! Note → Zola page conversion
//!
//! An Obsidian note usually opens with a `# Heading` line. Zola wants the
//! title in TOML frontmatter instead, so the heading is lifted into a
//! `+++` block together with the publish date.

use std::path::Path;

use chrono::NaiveDate;

use crate::domain::value_objects::{Frontmatter, FRONTMATTER_DELIMITER};

/// Title used when neither the note nor its file name supplies one
pub const DEFAULT_TITLE: &str = "Untitled Poem";

const HEADING_PREFIX: &str = "# ";

/// Convert note content to a Zola page.
///
/// - Content that already starts with `+++` is returned unchanged, so
///   converting a converted page is the identity.
/// - The title is the first `# ` heading anywhere in the note, else
///   `fallback_title`, else [`DEFAULT_TITLE`].
/// - Only a heading on the very first line is removed from the body, along
///   with one blank line directly after it.
pub fn convert(content: &str, fallback_title: &str, date: NaiveDate) -> String {
    let lines: Vec<&str> = content.split('\n').collect();

    if lines
        .first()
        .is_some_and(|first| first.trim() == FRONTMATTER_DELIMITER)
    {
        return content.to_string();
    }

    let title = resolve_title(&lines, fallback_title);
    let frontmatter = Frontmatter::new(title, date);

    let mut body: &[&str] = &lines;
    if body.first().is_some_and(|l| l.starts_with(HEADING_PREFIX)) {
        body = &body[1..];
        if body.first().is_some_and(|l| l.trim().is_empty()) {
            body = &body[1..];
        }
    }

    let mut out = frontmatter.render();
    out.push_str(&body.join("\n"));
    out
}

fn resolve_title(lines: &[&str], fallback_title: &str) -> String {
    let heading = lines
        .iter()
        .find_map(|line| line.strip_prefix(HEADING_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    match heading {
        Some(title) => title.to_string(),
        None if !fallback_title.trim().is_empty() => fallback_title.to_string(),
        None => DEFAULT_TITLE.to_string(),
    }
}

/// Derive a title from a note's file name: `evening-rain_draft.md` → `Evening Rain Draft`.
pub fn fallback_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
