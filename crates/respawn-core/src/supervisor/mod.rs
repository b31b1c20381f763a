//! Child process lifecycle.
//!
//! The event loop never talks to the OS directly; it drives an [`Executor`]
//! which knows how to start the command, kill it and clear the display.
//! [`RealExecutor`] does this for real, [`RecordingExecutor`] only counts.

mod real;
mod recording;

pub use real::{ChildProcess, RealExecutor};
pub use recording::{RecordedChild, Recording, RecordingExecutor, RecordingHandle};

use crate::command::CommandSpec;
use crate::error::Result;
use async_trait::async_trait;

/// Strategy for starting and stopping the supervised command.
///
/// Implementations must leave no process running after a successful
/// [`kill`](Executor::kill), and must not start anything when
/// [`start`](Executor::start) fails.
#[async_trait]
pub trait Executor: Send {
    /// Handle to one running instance of the command.
    type Child: Send;

    /// Launch the command with stdout and stderr passed through.
    fn start(&mut self, spec: &CommandSpec) -> Result<Self::Child>;

    /// Forcibly terminate `child` and wait for it to go away.
    ///
    /// A child that already exited on its own counts as killed.
    async fn kill(&mut self, child: Self::Child) -> Result<()>;

    /// Clear the terminal before a fresh run.
    fn clear_screen(&mut self);
}
