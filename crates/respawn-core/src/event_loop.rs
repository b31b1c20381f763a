//! The watch-debounce-restart state machine.
//!
//! One task owns the child process and multiplexes three inputs: watcher
//! errors, change events and a cancellation signal. Restarts run inline, so
//! no second event can be handled while a kill or start is in flight.

use crate::command::CommandSpec;
use crate::debounce::DebounceGate;
use crate::error::{Error, Result};
use crate::supervisor::Executor;
use crate::watch::{ChangeEvent, WatchStreams};
use tokio::sync::oneshot;
use tracing::{debug, error, info, trace};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The cancellation signal was delivered
    Cancelled,
    /// The watcher reported an error
    WatchError,
    /// Killing or starting the child failed
    ProcessError,
}

impl Termination {
    /// Classify the outcome of [`EventLoop::run`].
    pub fn of(outcome: &Result<()>) -> Self {
        match outcome {
            Ok(()) => Termination::Cancelled,
            Err(Error::WatchStream(_)) => Termination::WatchError,
            Err(_) => Termination::ProcessError,
        }
    }
}

/// Owner of the running child and the debounce gate.
pub struct EventLoop<E: Executor> {
    executor: E,
    spec: CommandSpec,
    gate: DebounceGate,
    child: Option<E::Child>,
}

impl<E: Executor> EventLoop<E> {
    /// Clear the screen and start the first instance of `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Process`] if the command cannot be started.
    pub fn start(mut executor: E, spec: CommandSpec, gate: DebounceGate) -> Result<Self> {
        executor.clear_screen();
        let child = executor.start(&spec)?;
        Ok(Self {
            executor,
            spec,
            gate,
            child: Some(child),
        })
    }

    /// Command being supervised.
    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Run until cancellation or a fatal error.
    ///
    /// Returns `Ok(())` only when `shutdown` fires (or its sender is
    /// dropped). Watcher errors and process failures are returned as-is.
    /// Pending errors are looked at before pending events, and pending
    /// events before cancellation.
    pub async fn run(
        mut self,
        streams: WatchStreams,
        mut shutdown: oneshot::Receiver<()>,
    ) -> Result<()> {
        let WatchStreams {
            mut events,
            mut errors,
        } = streams;

        let outcome = loop {
            tokio::select! {
                biased;

                Some(err) = errors.recv() => {
                    error!(error = %err, "File watcher failed");
                    break Err(Error::WatchStream(err));
                }

                Some(event) = events.recv() => {
                    if let Err(err) = self.handle_event(event).await {
                        break Err(err);
                    }
                }

                _ = &mut shutdown => {
                    break Ok(());
                }
            }
        };

        debug!(reason = ?Termination::of(&outcome), "Event loop terminated");
        outcome
    }

    async fn handle_event(&mut self, event: ChangeEvent) -> Result<()> {
        if !event.kind.is_write() {
            trace!(path = %event.path().display(), kind = ?event.kind, "Ignoring change");
            return Ok(());
        }

        if !self.gate.try_acquire() {
            debug!(path = %event.path().display(), "Change within debounce window, dropped");
            return Ok(());
        }

        info!(path = %event.path().display(), "Change detected, restarting");
        self.restart().await
    }

    /// Kill the current child, then start a new one. Never the other way round.
    async fn restart(&mut self) -> Result<()> {
        if let Some(old) = self.child.take() {
            self.executor.kill(old).await?;
        }
        self.executor.clear_screen();
        self.child = Some(self.executor.start(&self.spec)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supervisor::RecordingExecutor;
    use crate::watch::ChangeKind;
    use std::time::Duration;

    fn spec() -> CommandSpec {
        CommandSpec::new(["echo", "hi"]).unwrap()
    }

    #[test]
    fn test_termination_classification() {
        assert_eq!(Termination::of(&Ok(())), Termination::Cancelled);
        assert_eq!(
            Termination::of(&Err(Error::WatchStream(notify::Error::generic("x")))),
            Termination::WatchError
        );
        assert_eq!(
            Termination::of(&Err(Error::Process {
                action: crate::error::ProcessAction::Kill,
                program: "x".to_string(),
                source: std::io::Error::other("x"),
            })),
            Termination::ProcessError
        );
    }

    #[test]
    fn test_start_failure_is_reported() {
        let executor = RecordingExecutor::new().fail_start_at(1);
        let handle = executor.handle();
        let result = EventLoop::start(executor, spec(), DebounceGate::default());
        assert!(matches!(result, Err(Error::Process { .. })));
        assert_eq!(handle.starts(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_write_events_are_ignored() {
        let executor = RecordingExecutor::new();
        let handle = executor.handle();
        let event_loop = EventLoop::start(executor, spec(), DebounceGate::default()).unwrap();

        let (senders, streams) = WatchStreams::channel(16);
        let (cancel, shutdown) = oneshot::channel();
        for kind in [ChangeKind::Create, ChangeKind::Remove, ChangeKind::Rename] {
            senders
                .events
                .send(ChangeEvent::new("/project/a.txt", kind))
                .await
                .unwrap();
        }
        cancel.send(()).unwrap();

        event_loop.run(streams, shutdown).await.unwrap();
        assert_eq!(handle.starts(), 1);
        assert_eq!(handle.kills(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_kill_failure_stops_loop() {
        let executor = RecordingExecutor::new().fail_kill();
        let handle = executor.handle();
        let event_loop = EventLoop::start(
            executor,
            spec(),
            DebounceGate::new(Duration::from_millis(10)),
        )
        .unwrap();

        let (senders, streams) = WatchStreams::channel(16);
        let (_cancel, shutdown) = oneshot::channel();
        senders
            .events
            .send(ChangeEvent::write("/project/a.txt"))
            .await
            .unwrap();

        let err = event_loop.run(streams, shutdown).await.unwrap_err();
        assert!(matches!(err, Error::Process { .. }));
        assert_eq!(handle.starts(), 1);
    }
}
