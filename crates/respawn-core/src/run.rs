//! Top-level entry point tying the components together.

use crate::command::CommandSpec;
use crate::debounce::{DebounceGate, DEFAULT_DEBOUNCE};
use crate::error::Result;
use crate::event_loop::EventLoop;
use crate::supervisor::Executor;
use crate::watch::WatchTree;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::info;

/// Knobs for [`run`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory to watch; the working directory when `None`
    pub root: Option<PathBuf>,
    /// Debounce window between restarts
    pub debounce: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            root: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Start `argv`, watch the project tree and restart on every qualifying
/// change until `shutdown` fires or something fails.
///
/// The command is started before the watches are built. If building them
/// fails the freshly started child is dropped with the loop, which kills it
/// when using [`RealExecutor`](crate::RealExecutor).
///
/// # Errors
///
/// - [`Error::Config`](crate::Error::Config) when `argv` is empty (nothing is started)
/// - [`Error::Environment`](crate::Error::Environment) when the watch tree cannot be built
/// - [`Error::WatchStream`](crate::Error::WatchStream) when the watcher reports an error
/// - [`Error::Process`](crate::Error::Process) when a start or kill fails
pub async fn run<E: Executor>(
    argv: Vec<String>,
    executor: E,
    options: RunOptions,
    shutdown: oneshot::Receiver<()>,
) -> Result<()> {
    let spec = CommandSpec::new(argv)?;
    let event_loop = EventLoop::start(executor, spec, DebounceGate::new(options.debounce))?;

    let (tree, streams) = match &options.root {
        Some(root) => WatchTree::build(root)?,
        None => WatchTree::from_current_dir()?,
    };
    info!(
        root = %tree.root().display(),
        directories = tree.directories().len(),
        command = %event_loop.spec(),
        "Watching for changes"
    );

    let result = event_loop.run(streams, shutdown).await;
    tree.close();
    result
}
