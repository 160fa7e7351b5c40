//! Panel entry representation.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

use crate::nfc_string;
use crate::paths::PARENT_TOKEN;

/// What an [`Entry`] stands for in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    /// The synthetic "go to parent" row. Never produced by a filesystem read.
    ParentMarker,
    /// A subdirectory (symlinks are classified by their target).
    Directory,
    /// A regular file, or the synthetic error row of a degraded listing.
    File,
}

/// A single row of a directory listing.
///
/// `Entry` is immutable; listings are rebuilt rather than edited. It keeps
/// two names: the NFC display name used for sorting, drawing and focus
/// restoration, and the name exactly as the filesystem returned it, which
/// is what navigation joins onto the current path.
///
/// # Examples
///
/// ```
/// use dnav_core::{Entry, EntryKind};
///
/// let entry = Entry::directory("src");
/// assert_eq!(entry.kind(), EntryKind::Directory);
/// assert_eq!(entry.label(), "[src]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    name: String,
    file_name: OsString,
    kind: EntryKind,
}

impl Entry {
    /// The parent marker (`..`).
    pub fn parent_marker() -> Self {
        Self {
            name: PARENT_TOKEN.to_string(),
            file_name: OsString::from(PARENT_TOKEN),
            kind: EntryKind::ParentMarker,
        }
    }

    /// A directory entry for the on-disk name `file_name`.
    pub fn directory(file_name: impl AsRef<OsStr>) -> Self {
        Self::named(file_name.as_ref(), EntryKind::Directory)
    }

    /// A file entry for the on-disk name `file_name`.
    pub fn file(file_name: impl AsRef<OsStr>) -> Self {
        Self::named(file_name.as_ref(), EntryKind::File)
    }

    fn named(file_name: &OsStr, kind: EntryKind) -> Self {
        Self {
            name: nfc_string(&file_name.to_string_lossy()),
            file_name: file_name.to_os_string(),
            kind,
        }
    }

    /// Returns the display name (final path component, or `..`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name as stored on disk. Not normalised, possibly not UTF-8.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Returns the entry kind.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` for directories and the parent marker.
    pub fn is_navigable(&self) -> bool {
        matches!(self.kind, EntryKind::Directory | EntryKind::ParentMarker)
    }

    /// The fragment handed to directory navigation when this entry is activated.
    ///
    /// This is the on-disk name, so it joins back onto the directory it was
    /// read from even when the display name differs. Files have none.
    pub fn nav_fragment(&self) -> Option<&OsStr> {
        match self.kind {
            EntryKind::ParentMarker | EntryKind::Directory => Some(&self.file_name),
            EntryKind::File => None,
        }
    }

    /// The row text: `[name]` for directories, `..` for the parent marker,
    /// the bare name for files.
    pub fn label(&self) -> Cow<'_, str> {
        match self.kind {
            EntryKind::Directory => Cow::Owned(format!("[{}]", self.name)),
            EntryKind::ParentMarker | EntryKind::File => Cow::Borrowed(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_marker_uses_up_token() {
        let entry = Entry::parent_marker();
        assert_eq!(entry.name(), "..");
        assert_eq!(entry.kind(), EntryKind::ParentMarker);
        assert_eq!(entry.label(), "..");
        assert_eq!(entry.nav_fragment(), Some(OsStr::new("..")));
    }

    #[test]
    fn directory_label_is_bracketed() {
        let entry = Entry::directory("docs");
        assert_eq!(entry.label(), "[docs]");
        assert_eq!(entry.nav_fragment(), Some(OsStr::new("docs")));
        assert!(entry.is_navigable());
    }

    #[test]
    fn file_label_is_plain_and_not_navigable() {
        let entry = Entry::file("notes.txt");
        assert_eq!(entry.label(), "notes.txt");
        assert_eq!(entry.nav_fragment(), None);
        assert!(!entry.is_navigable());
    }

    #[test]
    fn names_are_composed_to_nfc() {
        // "e" followed by a combining acute accent
        let entry = Entry::file("cafe\u{0301}.txt");
        assert_eq!(entry.name(), "caf\u{00e9}.txt");
        assert_eq!(entry.file_name(), OsStr::new("cafe\u{0301}.txt"));
    }

    #[test]
    fn directory_navigates_by_on_disk_name() {
        let entry = Entry::directory("cafe\u{0301}");
        assert_eq!(entry.label(), "[caf\u{00e9}]");
        assert_eq!(entry.nav_fragment(), Some(OsStr::new("cafe\u{0301}")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_kept_raw_and_shown_lossy() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"bad\xffdir");
        let entry = Entry::directory(raw);
        assert_eq!(entry.name(), "bad\u{fffd}dir");
        assert_eq!(entry.file_name(), raw);
        assert_eq!(entry.nav_fragment(), Some(raw));
    }

    #[test]
    fn kinds_order_marker_before_directories_before_files() {
        assert!(EntryKind::ParentMarker < EntryKind::Directory);
        assert!(EntryKind::Directory < EntryKind::File);
    }
}
