//! Respawn core - restart a command whenever the project tree changes.
//!
//! This crate holds the watch-debounce-restart loop behind the `respawn`
//! binary. It can also be embedded: everything the loop touches is passed
//! in explicitly, including the process strategy and the shutdown signal.
//!
//! # Architecture
//!
//! - [`watch`] - Builds the directory watch set and translates notifications
//! - [`supervisor`] - Starts and kills the child through an [`Executor`]
//! - [`debounce`] - Drops restart triggers during the cool-down window
//! - [`event_loop`] - Coordinates the three pieces above
//!
//! # Example
//!
//! ```rust,no_run
//! use respawn_core::{run, RealExecutor, RunOptions};
//!
//! # async fn demo() -> respawn_core::Result<()> {
//! let (cancel, shutdown) = tokio::sync::oneshot::channel();
//! tokio::spawn(async move {
//!     tokio::time::sleep(std::time::Duration::from_secs(60)).await;
//!     let _ = cancel.send(());
//! });
//!
//! let argv = vec!["cargo".to_string(), "test".to_string()];
//! run(argv, RealExecutor::default(), RunOptions::default(), shutdown).await
//! # }
//! ```

pub mod command;
pub mod debounce;
pub mod error;
pub mod event_loop;
mod run;
pub mod supervisor;
pub mod watch;

pub use command::CommandSpec;
pub use debounce::{DebounceGate, DEFAULT_DEBOUNCE};
pub use error::{Error, ProcessAction, Result};
pub use event_loop::{EventLoop, Termination};
pub use run::{run, RunOptions};
pub use supervisor::{ChildProcess, Executor, RealExecutor, RecordingExecutor, RecordingHandle};
pub use watch::{ChangeEvent, ChangeKind, WatchStreams, WatchTree};
