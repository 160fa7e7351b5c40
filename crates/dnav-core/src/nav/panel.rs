//! Single file panel: current listing, focus and viewport.
//!
//! [`PanelState`] owns one [`DirectorySnapshot`] and keeps a focus index and
//! a viewport offset consistent with it. Like the rest of the navigation
//! layer, every transition consumes `self` and returns the next state.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::fs::entry::{Entry, EntryKind};
use crate::fs::snapshot::DirectorySnapshot;
use crate::paths::{PathStyle, PARENT_TOKEN};

/// Result of activating the focused entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A directory change happened (into a child or up to the parent).
    Navigated,
    /// The focused entry is a file. The core does nothing with it; the
    /// host may open it.
    File(PathBuf),
    /// Nothing to activate (empty or degraded listing, or already at a root).
    Nothing,
}

/// One visible row of a panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    /// Index into the entry list, or `None` for a blank filler row.
    pub index: Option<usize>,
    /// The entry drawn on this row.
    pub entry: Option<&'a Entry>,
    /// `true` on the focus row of an active panel.
    pub focused: bool,
}

/// A file panel with focus and scroll state over one directory listing.
///
/// Invariants held after every transition:
///
/// - with entries, `focus_index < entries.len()`; without, focus and top are `0`;
/// - `top_index <= focus_index < top_index + height`, where a non-positive
///   viewport height counts as `1`.
#[derive(Debug, Clone)]
pub struct PanelState {
    snapshot: DirectorySnapshot,
    focus_index: usize,
    top_index: usize,
    viewport_height: i32,
    style: PathStyle,
}

/// The directory a panel opens when none is configured.
///
/// The process working directory, or `.` if it cannot be determined.
pub fn default_start_dir() -> PathBuf {
    match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("failed to get current directory: {e}");
            PathBuf::from(".")
        }
    }
}

impl PanelState {
    /// Creates a panel showing `initial_path` with the native path style.
    pub fn new(initial_path: &Path, viewport_height: i32) -> Self {
        Self::with_style(initial_path, viewport_height, PathStyle::native())
    }

    /// Creates a panel showing `initial_path` with an explicit path style.
    ///
    /// Focus starts on the first entry.
    pub fn with_style(initial_path: &Path, viewport_height: i32, style: PathStyle) -> Self {
        let snapshot = DirectorySnapshot::load_with_style(initial_path, style);
        Self {
            snapshot,
            focus_index: 0,
            top_index: 0,
            viewport_height,
            style,
        }
        .with_focus(0)
    }

    /// Returns the directory currently displayed.
    pub fn current_dir(&self) -> &Path {
        self.snapshot.path()
    }

    /// Returns the current listing.
    pub fn snapshot(&self) -> &DirectorySnapshot {
        &self.snapshot
    }

    /// Returns the current entries.
    pub fn entries(&self) -> &[Entry] {
        self.snapshot.entries()
    }

    /// Returns the focus index (`0` when the listing is empty).
    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// Returns the index of the entry drawn on the first visible row.
    pub fn top_index(&self) -> usize {
        self.top_index
    }

    /// Returns the viewport height as supplied by the host.
    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    /// Returns the path style used for parent arithmetic.
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Returns the focused entry, if any.
    pub fn focused_entry(&self) -> Option<&Entry> {
        self.snapshot.entries().get(self.focus_index)
    }

    fn effective_height(&self) -> usize {
        self.viewport_height.max(1) as usize
    }

    /// Replaces the listing with a fresh load of `path` and scrolls to the top.
    pub fn reload(self, path: &Path) -> Self {
        let snapshot = DirectorySnapshot::load_with_style(path, self.style);
        Self {
            snapshot,
            focus_index: 0,
            top_index: 0,
            ..self
        }
    }

    /// Re-reads the current directory.
    pub fn refresh(self) -> Self {
        let path = self.current_dir().to_path_buf();
        self.reload(&path)
    }

    /// Moves focus to `index` (clamped) and scrolls just enough to reveal it.
    pub fn with_focus(self, index: usize) -> Self {
        let len = self.snapshot.len();
        if len == 0 {
            return Self {
                focus_index: 0,
                top_index: 0,
                ..self
            };
        }

        let focus_index = index.min(len - 1);
        let height = self.effective_height();
        let top_index = if focus_index < self.top_index {
            focus_index
        } else if focus_index >= self.top_index + height {
            focus_index + 1 - height
        } else {
            self.top_index
        };

        Self {
            focus_index,
            top_index,
            ..self
        }
    }

    /// Moves focus by `delta` rows; negative moves up.
    pub fn move_focus(self, delta: isize) -> Self {
        let target = self.focus_index.saturating_add_signed(delta);
        self.with_focus(target)
    }

    /// Moves focus up by one row.
    pub fn move_up(self) -> Self {
        self.move_focus(-1)
    }

    /// Moves focus down by one row.
    pub fn move_down(self) -> Self {
        self.move_focus(1)
    }

    /// Jumps to the first entry.
    pub fn go_to_first(self) -> Self {
        self.with_focus(0)
    }

    /// Jumps to the last entry.
    pub fn go_to_last(self) -> Self {
        let last = self.snapshot.len().saturating_sub(1);
        self.with_focus(last)
    }

    /// Moves focus up by one viewport.
    pub fn page_up(self) -> Self {
        let height = self.effective_height() as isize;
        self.move_focus(-height)
    }

    /// Moves focus down by one viewport.
    pub fn page_down(self) -> Self {
        let height = self.effective_height() as isize;
        self.move_focus(height)
    }

    /// Applies a new viewport height, keeping the focused row visible.
    pub fn with_viewport_height(self, viewport_height: i32) -> Self {
        let focus = self.focus_index;
        let panel = Self {
            viewport_height,
            ..self
        };
        panel.with_focus(focus)
    }

    /// Navigates relative to the current directory.
    ///
    /// `..` goes to the parent (no-op at a root) and re-focuses the
    /// directory just left when it is listed. Anything else is joined onto
    /// the current path and loaded with focus on the first entry.
    pub fn change_directory(self, fragment: impl AsRef<OsStr>) -> Self {
        let fragment = fragment.as_ref();
        if fragment != PARENT_TOKEN {
            let target = self.current_dir().join(fragment);
            return self.reload(&target);
        }

        let Some(parent) = self.style.parent_of(self.current_dir()) else {
            tracing::debug!("already at root: {}", self.current_dir().display());
            return self;
        };
        let focus_name = crate::nfc_string(&self.style.base_name(self.current_dir()));

        let panel = self.reload(&parent);
        match panel.snapshot.position_of(&focus_name) {
            Some(index) => {
                tracing::debug!("restoring focus to {focus_name:?} at {index}");
                panel.with_focus(index)
            }
            None => panel,
        }
    }

    /// Goes to the parent directory, if there is one.
    pub fn go_up(self) -> Self {
        self.change_directory(PARENT_TOKEN)
    }

    /// Activates the focused entry.
    ///
    /// Directories and the parent marker navigate; files are reported back
    /// untouched.
    pub fn execute_focused(self) -> (Self, Activation) {
        if self.snapshot.is_degraded() {
            return (self, Activation::Nothing);
        }
        let Some(entry) = self.focused_entry() else {
            return (self, Activation::Nothing);
        };

        match (entry.kind(), entry.nav_fragment()) {
            (EntryKind::File, _) | (_, None) => {
                let path = self.current_dir().join(entry.file_name());
                tracing::debug!("file activation left to host: {}", path.display());
                (self, Activation::File(path))
            }
            (_, Some(fragment)) => {
                let fragment = fragment.to_os_string();
                let before = self.current_dir().to_path_buf();
                let panel = self.change_directory(&fragment);
                if panel.current_dir() == before {
                    (panel, Activation::Nothing)
                } else {
                    (panel, Activation::Navigated)
                }
            }
        }
    }

    /// The rows of the viewport, top to bottom.
    ///
    /// Yields exactly `viewport_height` rows (none when it is not positive).
    /// Rows past the end of the listing are blank. The focus row is only
    /// flagged when `active` is set. Rows are produced lazily, so a host
    /// that passes an oversized height only pays for what it draws.
    pub fn rows(&self, active: bool) -> impl ExactSizeIterator<Item = Row<'_>> + '_ {
        let height = self.viewport_height.max(0) as usize;
        (0..height).map(move |r| {
            let index = self.top_index + r;
            let entry = self.snapshot.entries().get(index);
            Row {
                index: entry.map(|_| index),
                entry,
                focused: active && entry.is_some() && index == self.focus_index,
            }
        })
    }
}
