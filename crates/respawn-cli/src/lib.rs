//! Respawn CLI - restart a command whenever project files change.
//!
//! This crate wraps [`respawn_core`] with argument parsing, layered
//! configuration, logging, and terminal output.
//!
//! # Architecture
//!
//! - [`cli`] - clap definition of the command line
//! - [`config`] - `respawn.toml`, `RESPAWN_*` variables, and flag overrides
//! - [`commands`] - The watch command itself
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Colored status lines on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use clap::Parser;
//! use respawn_cli::{cli::Cli, commands, logger};
//!
//! # async fn demo() -> respawn_cli::Result<()> {
//! let cli = Cli::parse_from(["respawn", "cargo", "check"]);
//! logger::init_logger(cli.verbose, cli.quiet, cli.no_color);
//! commands::watch_execute(cli).await
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
