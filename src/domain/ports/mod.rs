//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod file_system;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};
pub use file_system::{FileListing, FileSystem, FsError, FsResult};
