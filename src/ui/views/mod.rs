pub mod build;
pub mod sync;
pub mod watch;
