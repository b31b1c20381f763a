//! Command implementations for the `respawn` binary.
//!
//! - [`watch`] - Run a command and restart it on file changes

pub mod watch;

pub use watch::execute as watch_execute;
