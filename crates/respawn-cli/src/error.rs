//! Error handling for the Respawn CLI.
//!
//! Errors from the core loop are wrapped in [`CliError`] alongside
//! configuration errors. At the top level they are converted into `miette`
//! reports (see [`cli_error_to_miette`]) which print to stderr and make the
//! process exit non-zero.
//!
//! # Example
//!
//! ```rust,no_run
//! use respawn_cli::error::{ConfigError, Result};
//! use std::path::PathBuf;
//!
//! fn require(path: PathBuf) -> Result<()> {
//!     if !path.exists() {
//!         return Err(ConfigError::NotFound(path).into());
//!     }
//!     Ok(())
//! }
//! ```

mod miette;

pub use self::miette::cli_error_to_miette;

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failures from the watch-restart loop
    #[error(transparent)]
    Run(#[from] respawn_core::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file passed with --config doesn't exist
    #[error("Config file not found: {}\n\nHint: Create respawn.toml or drop the --config flag", .0.display())]
    NotFound(PathBuf),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
