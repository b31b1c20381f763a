//! Change notifications delivered to the event loop.

use notify::event::{EventKind, ModifyKind};
use std::path::{Path, PathBuf};

/// Operation kind of a filesystem change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// File or directory was created
    Create,
    /// File contents were written
    Write,
    /// File or directory was removed
    Remove,
    /// File or directory was renamed or moved
    Rename,
    /// Permissions or other metadata changed
    Chmod,
    /// Anything the backend could not classify (access, unknown, ...)
    Other,
}

impl ChangeKind {
    /// Whether this kind of change should restart the command.
    pub fn is_write(self) -> bool {
        self == ChangeKind::Write
    }
}

impl From<&EventKind> for ChangeKind {
    fn from(kind: &EventKind) -> Self {
        match kind {
            EventKind::Create(_) => ChangeKind::Create,
            EventKind::Remove(_) => ChangeKind::Remove,
            EventKind::Modify(ModifyKind::Name(_)) => ChangeKind::Rename,
            EventKind::Modify(ModifyKind::Metadata(_)) => ChangeKind::Chmod,
            // Polling and kqueue backends report content changes as `Any`
            EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any) => ChangeKind::Write,
            EventKind::Modify(ModifyKind::Other) | EventKind::Access(_) => ChangeKind::Other,
            EventKind::Any | EventKind::Other => ChangeKind::Other,
        }
    }
}

/// A single path-level change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Affected path
    pub path: PathBuf,
    /// What happened to it
    pub kind: ChangeKind,
}

impl ChangeEvent {
    /// Create a change event.
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Shorthand for a content write to `path`.
    pub fn write(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::Write)
    }

    /// Get the path affected by this change.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Split a backend event into one change per affected path.
    pub fn from_notify(event: notify::Event) -> impl Iterator<Item = ChangeEvent> {
        let kind = ChangeKind::from(&event.kind);
        event
            .paths
            .into_iter()
            .map(move |path| ChangeEvent { path, kind })
    }
}
