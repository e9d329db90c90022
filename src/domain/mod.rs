//! Domain Layer
//!
//! Pure publishing logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Frontmatter, MarkdownExtensions)
//! - `services/` - Stateless conversions (note → Zola page)
//! - `ports/` - Interface definitions for infrastructure (file system, processes)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
