//! Value Objects
//!
//! Immutable types that describe what gets published.

mod extensions;
mod frontmatter;

pub use extensions::MarkdownExtensions;
pub use frontmatter::{Frontmatter, FRONTMATTER_DELIMITER};
