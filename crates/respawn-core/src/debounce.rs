//! Cool-down gate between restarts.
//!
//! A single file save typically produces several write notifications. The
//! gate lets the first one through and drops everything else until the
//! window has elapsed; dropped events are not queued or replayed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Default cool-down after a restart.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(2);

/// Atomic "ready for next restart" flag with a timed reset.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    ready: Arc<AtomicBool>,
    window: Duration,
}

impl DebounceGate {
    /// Create an open gate with the given cool-down window.
    pub fn new(window: Duration) -> Self {
        Self {
            ready: Arc::new(AtomicBool::new(true)),
            window,
        }
    }

    /// Cool-down window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Close the gate if it is open.
    ///
    /// On success a detached task reopens the gate after the window and
    /// `true` is returned. When the gate is already closed nothing happens
    /// and the caller must drop its event.
    ///
    /// Must be called from within a tokio runtime.
    pub fn try_acquire(&self) -> bool {
        if self
            .ready
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }

        let ready = Arc::clone(&self.ready);
        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            ready.store(true, Ordering::Release);
            trace!("Debounce window elapsed");
        });
        true
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
