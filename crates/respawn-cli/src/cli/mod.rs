//! Command-line interface definition for `respawn`.
//!
//! There are no subcommands: options come first, and everything from the
//! first positional argument onward is the command to supervise.
//!
//! ```text
//! respawn [OPTIONS] <PROGRAM> [ARGS]...
//! respawn -d 500 cargo test --workspace
//! ```

mod tests;

use crate::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

/// Respawn - restart a command whenever project files change
#[derive(Parser, Debug)]
#[command(
    name = "respawn",
    version,
    about = "Restart a command whenever project files change",
    long_about = "Respawn runs a command, watches every directory under the current one\n\
                  (skipping node_modules and .git), and restarts the command when a file\n\
                  is written. Restarts inside the debounce window are dropped."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Read settings from this file instead of ./respawn.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debounce window in milliseconds
    ///
    /// File changes seen within this long after a start are ignored.
    /// Defaults to 2000.
    #[arg(short, long = "debounce", value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Do not clear the terminal before each start
    #[arg(long)]
    pub no_clear: bool,

    /// Program to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Settings given explicitly on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            debounce_ms: self.debounce_ms,
            clear_screen: self.no_clear.then_some(false),
        }
    }
}
