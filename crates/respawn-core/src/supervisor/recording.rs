use super::Executor;
use crate::command::CommandSpec;
use crate::error::{Error, ProcessAction, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Counters collected by a [`RecordingExecutor`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recording {
    /// Successful starts
    pub starts: usize,
    /// Successful kills
    pub kills: usize,
    /// Screen clears
    pub clears: usize,
    /// Children started and not yet killed
    pub live: usize,
    /// Highest value `live` ever reached
    pub peak_live: usize,
}

/// Fake child handed out by a [`RecordingExecutor`].
#[derive(Debug, PartialEq, Eq)]
pub struct RecordedChild {
    /// 1-based start number
    pub id: usize,
}

/// Shared view of a recording, usable after the executor moved into the loop.
#[derive(Debug, Clone)]
pub struct RecordingHandle {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingHandle {
    /// Copy of the counters at this instant.
    pub fn snapshot(&self) -> Recording {
        self.inner.lock().clone()
    }

    pub fn starts(&self) -> usize {
        self.inner.lock().starts
    }

    pub fn kills(&self) -> usize {
        self.inner.lock().kills
    }
}

/// Executor that spawns nothing and records every call.
///
/// Failures can be injected to exercise the loop's error paths.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    inner: Arc<Mutex<Recording>>,
    fail_start_at: Option<usize>,
    fail_kill: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `n`th start attempt (1-based) fail.
    pub fn fail_start_at(mut self, n: usize) -> Self {
        self.fail_start_at = Some(n);
        self
    }

    /// Make every kill fail.
    pub fn fail_kill(mut self) -> Self {
        self.fail_kill = true;
        self
    }

    /// Handle for inspecting the counters.
    pub fn handle(&self) -> RecordingHandle {
        RecordingHandle {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    type Child = RecordedChild;

    fn start(&mut self, spec: &CommandSpec) -> Result<RecordedChild> {
        let mut rec = self.inner.lock();
        let attempt = rec.starts + 1;
        if self.fail_start_at == Some(attempt) {
            return Err(Error::Process {
                action: ProcessAction::Start,
                program: spec.program().to_string(),
                source: std::io::Error::other("injected start failure"),
            });
        }

        rec.starts = attempt;
        rec.live += 1;
        rec.peak_live = rec.peak_live.max(rec.live);
        Ok(RecordedChild { id: attempt })
    }

    async fn kill(&mut self, _child: RecordedChild) -> Result<()> {
        if self.fail_kill {
            return Err(Error::Process {
                action: ProcessAction::Kill,
                program: "recorded".to_string(),
                source: std::io::Error::other("injected kill failure"),
            });
        }

        let mut rec = self.inner.lock();
        rec.kills += 1;
        rec.live = rec.live.saturating_sub(1);
        Ok(())
    }

    fn clear_screen(&mut self) {
        self.inner.lock().clears += 1;
    }
}
