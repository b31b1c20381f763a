//! Logging setup for the `respawn` binary.
//!
//! Logs go to stderr so they never interleave with the supervised command's
//! stdout. Verbosity follows the global flags:
//!
//! 1. `--verbose`: DEBUG for respawn crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`: custom filter
//! 4. Default: INFO for respawn crates
//!
//! # Example
//!
//! ```rust,no_run
//! use respawn_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("Watching for changes");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "respawn=debug,respawn_core=debug,respawn_cli=debug";
const QUIET_FILTER: &str = "respawn=error,respawn_core=error,respawn_cli=error";
const DEFAULT_FILTER: &str = "respawn=info,respawn_core=info,respawn_cli=info";

/// Initialize the global tracing subscriber.
///
/// Call once, before anything logs. `verbose` wins over `quiet` even though
/// clap rejects the combination.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
