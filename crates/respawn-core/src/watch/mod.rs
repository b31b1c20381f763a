//! Recursive directory watching.
//!
//! The notification primitive reports changes for every file inside a
//! watched directory, so only directories are registered: one
//! non-recursive watch per directory found while walking the root.
//! Directories created after startup are not picked up.

mod event;
mod filter;

pub use event::{ChangeEvent, ChangeKind};
pub use filter::{WatchFilter, EXCLUDED_DIRS};

use crate::error::{walk_failed, Error, Result};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Capacity of the event and error channels between the watcher thread and
/// the event loop.
const CHANNEL_CAPACITY: usize = 256;

/// Receiving half of the watcher output, consumed by the event loop.
#[derive(Debug)]
pub struct WatchStreams {
    /// Path-level change notifications
    pub events: mpsc::Receiver<ChangeEvent>,
    /// Errors reported by the notification primitive
    pub errors: mpsc::Receiver<notify::Error>,
}

/// Sending half matching [`WatchStreams`].
#[derive(Debug, Clone)]
pub struct WatchSenders {
    pub events: mpsc::Sender<ChangeEvent>,
    pub errors: mpsc::Sender<notify::Error>,
}

impl WatchStreams {
    /// Create a connected sender/stream pair.
    ///
    /// The watch tree uses this internally; embedders and tests can use it to
    /// drive the event loop with synthetic events.
    pub fn channel(capacity: usize) -> (WatchSenders, WatchStreams) {
        let (event_tx, event_rx) = mpsc::channel(capacity);
        let (error_tx, error_rx) = mpsc::channel(capacity);
        (
            WatchSenders {
                events: event_tx,
                errors: error_tx,
            },
            WatchStreams {
                events: event_rx,
                errors: error_rx,
            },
        )
    }
}

/// Live set of directory watches.
///
/// Dropping the tree stops the underlying watcher; [`close`](Self::close)
/// additionally unregisters every directory explicitly.
pub struct WatchTree {
    watcher: RecommendedWatcher,
    filter: WatchFilter,
    directories: Vec<PathBuf>,
}

impl std::fmt::Debug for WatchTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchTree")
            .field("root", &self.filter.root())
            .field("directories", &self.directories.len())
            .finish()
    }
}

impl WatchTree {
    /// Watch the process's current working directory.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be determined, plus everything
    /// [`build`](Self::build) can fail with.
    pub fn from_current_dir() -> Result<(Self, WatchStreams)> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::environment("Failed to read working directory", e))?;
        Self::build(&cwd)
    }

    /// Walk `root` and register a watch on every non-excluded directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if the root cannot be resolved, the
    /// watcher cannot be created, the walk fails or a directory cannot be
    /// registered.
    pub fn build(root: &Path) -> Result<(Self, WatchStreams)> {
        let root = root
            .canonicalize()
            .map_err(|e| Error::environment(format!("Failed to resolve {}", root.display()), e))?;
        let filter = WatchFilter::new(&root);

        let (senders, streams) = WatchStreams::channel(CHANNEL_CAPACITY);
        let callback_filter = filter.clone();
        let mut watcher =
            notify::recommended_watcher(move |res: notify::Result<notify::Event>| match res {
                Ok(event) => {
                    for change in ChangeEvent::from_notify(event) {
                        if callback_filter.is_excluded(change.path()) {
                            trace!(path = %change.path().display(), "Ignoring excluded path");
                            continue;
                        }
                        // Receiver gone means the loop has finished
                        if senders.events.blocking_send(change).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    let _ = senders.errors.blocking_send(err);
                }
            })
            .map_err(|e| Error::environment("Failed to create file watcher", e))?;

        let directories = register_directories(&mut watcher, &filter)?;
        debug!(
            root = %root.display(),
            count = directories.len(),
            "Registered directory watches"
        );

        Ok((
            Self {
                watcher,
                filter,
                directories,
            },
            streams,
        ))
    }

    /// Root directory of the watch set.
    pub fn root(&self) -> &Path {
        self.filter.root()
    }

    /// Every directory currently registered with the watcher.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Unregister all watches and drop the watcher.
    pub fn close(mut self) {
        for dir in self.directories.drain(..) {
            // Directories deleted since startup are already gone from the backend
            if let Err(err) = self.watcher.unwatch(&dir) {
                debug!(path = %dir.display(), error = %err, "Failed to unwatch directory");
            }
        }
    }
}

fn register_directories(
    watcher: &mut RecommendedWatcher,
    filter: &WatchFilter,
) -> Result<Vec<PathBuf>> {
    let root = filter.root();
    let mut directories = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| filter.admits(entry.path()));

    for entry in walker {
        let entry = entry.map_err(|e| walk_failed(root, e))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        watcher
            .watch(entry.path(), RecursiveMode::NonRecursive)
            .map_err(|e| Error::watch_registration(entry.path(), e))?;
        trace!(path = %entry.path().display(), "Watching directory");
        directories.push(entry.into_path());
    }

    Ok(directories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_streams_channel_is_connected() {
        let (senders, mut streams) = WatchStreams::channel(4);
        senders
            .events
            .send(ChangeEvent::write("/project/src/main.rs"))
            .await
            .unwrap();
        senders
            .errors
            .send(notify::Error::generic("boom"))
            .await
            .unwrap();

        let event = streams.events.recv().await.unwrap();
        assert_eq!(event.kind, ChangeKind::Write);
        assert!(streams.errors.recv().await.is_some());
    }

    #[test]
    fn test_build_missing_root_fails() {
        let err = WatchTree::build(Path::new("/definitely/not/a/real/dir")).unwrap_err();
        assert!(matches!(err, Error::Environment { .. }));
        assert!(err.to_string().contains("Failed to resolve"));
    }
}
