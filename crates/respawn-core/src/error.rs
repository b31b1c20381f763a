//! Error types for the watch-restart loop.
//!
//! Every variant is terminal: the loop never retries, it stops and hands the
//! error back to the caller so the binary can report it and exit non-zero.

use std::path::Path;
use thiserror::Error;

/// Errors produced while starting or running the supervisor.
#[derive(Debug, Error)]
pub enum Error {
    /// The invocation itself is unusable (e.g. no command given)
    #[error("{0}")]
    Config(String),

    /// The surrounding environment could not be prepared
    #[error("{context}: {source}")]
    Environment {
        /// What was being attempted
        context: String,
        /// Underlying cause
        #[source]
        source: EnvironmentSource,
    },

    /// The notification primitive reported an error on its error channel
    #[error("File watcher error: {0}")]
    WatchStream(#[source] notify::Error),

    /// Starting or killing the child process failed
    #[error("Failed to {action} '{program}': {source}")]
    Process {
        /// "start" or "kill"
        action: ProcessAction,
        /// Program name of the command being supervised
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Underlying cause of an [`Error::Environment`].
#[derive(Debug, Error)]
pub enum EnvironmentSource {
    /// Plain I/O failure (e.g. reading the working directory)
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The notification primitive could not be created or a watch registered
    #[error(transparent)]
    Notify(#[from] notify::Error),

    /// The recursive directory walk failed
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

/// Which process operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessAction {
    Start,
    Kill,
}

impl std::fmt::Display for ProcessAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessAction::Start => f.write_str("start"),
            ProcessAction::Kill => f.write_str("kill"),
        }
    }
}

impl Error {
    /// The error returned when the command line is empty.
    pub fn no_arguments() -> Self {
        Error::Config("No arguments supplied".to_string())
    }

    pub(crate) fn environment(
        context: impl Into<String>,
        source: impl Into<EnvironmentSource>,
    ) -> Self {
        Error::Environment {
            context: context.into(),
            source: source.into(),
        }
    }

    pub(crate) fn watch_registration(path: &Path, source: notify::Error) -> Self {
        Error::environment(format!("Failed to watch {}", path.display()), source)
    }
}

/// Result alias used throughout the core crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn walk_failed(root: &Path, source: walkdir::Error) -> Error {
    Error::environment(format!("Failed to walk {}", root.display()), source)
}
