//! Immutable, ordered listing of one directory.

use std::path::{Path, PathBuf};

use crate::fs::entry::{Entry, EntryKind};
use crate::fs::ops::read_directory;
use crate::paths::{normalize, PathStyle};

/// One directory listing produced by a single filesystem read.
///
/// Entries are ordered as `[..]`, then directories, then files, each group
/// by name in byte order. A snapshot is never edited after it is built;
/// reloading produces a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    path: PathBuf,
    entries: Vec<Entry>,
    error: Option<String>,
}

impl DirectorySnapshot {
    /// Loads `path` using the native [`PathStyle`].
    pub fn load(path: &Path) -> Self {
        Self::load_with_style(path, PathStyle::native())
    }

    /// Loads `path`, using `style` to decide whether it has a parent.
    ///
    /// Never fails: if the directory cannot be read, the snapshot holds a
    /// single synthetic [`EntryKind::File`] row whose
    /// name describes the problem, and [`error`](Self::error) is set.
    pub fn load_with_style(path: &Path, style: PathStyle) -> Self {
        let path = normalize(path);
        tracing::debug!("loading {}", path.display());

        let children = match read_directory(&path) {
            Ok(children) => children,
            Err(e) => {
                let message = e.to_string();
                tracing::warn!("degraded listing for {}: {message}", path.display());
                return Self {
                    path,
                    entries: vec![Entry::file(&message)],
                    error: Some(message),
                };
            }
        };

        let (mut dirs, mut files): (Vec<Entry>, Vec<Entry>) =
            children.into_iter().partition(Entry::is_navigable);
        dirs.sort_by(|a, b| a.name().cmp(b.name()));
        files.sort_by(|a, b| a.name().cmp(b.name()));

        let mut entries = Vec::with_capacity(dirs.len() + files.len() + 1);
        if style.has_parent(&path) {
            entries.push(Entry::parent_marker());
        }
        entries.extend(dirs);
        entries.extend(files);

        tracing::debug!("{} entries in {}", entries.len(), path.display());
        Self {
            path,
            entries,
            error: None,
        }
    }

    /// The normalised directory this snapshot was built from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The ordered entries.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries, including the parent marker.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The failure message if this is a degraded listing.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` if the directory could not be read.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// Index of the first non-marker entry called `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.kind() != EntryKind::ParentMarker && e.name() == name)
    }
}
