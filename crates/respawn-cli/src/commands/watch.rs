//! Watch the working directory and restart the command on change.

use crate::cli::Cli;
use crate::config::RespawnConfig;
use crate::error::Result;
use crate::ui;
use respawn_core::{RealExecutor, RunOptions};
use tokio::signal;
use tokio::sync::oneshot;

/// Execute the watch loop until Ctrl+C or a fatal error.
///
/// # Steps
///
/// 1. Load and validate configuration
/// 2. Hook Ctrl+C up to the loop's shutdown channel
/// 3. Hand the command to [`respawn_core::run`]
pub async fn execute(cli: Cli) -> Result<()> {
    let config = RespawnConfig::load(&cli.overrides(), cli.config.as_deref())?;
    tracing::debug!(
        "Debounce {}ms, clear screen: {}",
        config.debounce_ms,
        config.clear_screen
    );

    let executor = RealExecutor::new(config.clear_screen);
    let options = RunOptions {
        root: None,
        debounce: config.debounce(),
    };

    let (cancel, shutdown) = oneshot::channel();
    let interrupt = tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                ui::info("Shutting down...");
                let _ = cancel.send(());
            }
            Err(e) => {
                ui::warning(&format!("Ctrl+C handling unavailable: {e}"));
                // Hold the sender so the loop is not cancelled by its drop
                std::future::pending::<()>().await;
                drop(cancel);
            }
        }
    });

    let result = respawn_core::run(cli.command, executor, options, shutdown).await;
    interrupt.abort();
    result?;

    ui::success("Stopped");
    Ok(())
}
