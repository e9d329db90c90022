//! Zola page frontmatter
//!
//! Only the two keys the site templates read are produced.

use chrono::NaiveDate;

/// TOML frontmatter fence used by Zola
pub const FRONTMATTER_DELIMITER: &str = "+++";

/// Frontmatter block prepended to every published page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: String,
    pub date: NaiveDate,
}

impl Frontmatter {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }

    /// Render the block, including the blank line that separates it from the body.
    ///
    /// The title is written verbatim: embedded `"` characters are not escaped.
    pub fn render(&self) -> String {
        format!(
            "{delim}\ntitle = \"{title}\"\ndate = {date}\n{delim}\n\n",
            delim = FRONTMATTER_DELIMITER,
            title = self.title,
            date = self.date.format("%Y-%m-%d"),
        )
    }
}
