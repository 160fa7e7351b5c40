//! Filesystem boundary: directory reads and directory creation.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;

/// Reads the immediate children of a directory as [`Entry`] values.
///
/// The returned entries are **unsorted** and never include the parent
/// marker. Symlinks are classified by their target. Children that are
/// neither a regular file nor a directory, or whose metadata cannot be
/// read, are skipped. Hidden entries are included.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use dnav_core::read_directory;
/// use std::path::Path;
///
/// let entries = read_directory(Path::new("/home/user")).unwrap();
/// for entry in &entries {
///     println!("{}", entry.label());
/// }
/// ```
pub fn read_directory(path: &Path) -> CoreResult<Vec<Entry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(e, path))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("error iterating {}: {e}", path.display());
                continue;
            }
        };
        let child = dir_entry.path();
        let metadata = match std::fs::metadata(&child) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("skipping {}: {e}", child.display());
                continue;
            }
        };
        let name = dir_entry.file_name();
        if metadata.is_dir() {
            entries.push(Entry::directory(&name));
        } else if metadata.is_file() {
            entries.push(Entry::file(&name));
        } else {
            tracing::debug!("skipping special file {}", child.display());
        }
    }

    Ok(entries)
}

/// Creates a single directory named `name` inside `parent`.
///
/// Returns the path of the new directory. The parent must already exist;
/// intermediate directories are not created.
///
/// # Errors
///
/// - [`CoreError::InvalidName`] if `name` is empty, `.`/`..`, or contains a separator.
/// - [`CoreError::AlreadyExists`] if something already exists at the target.
/// - [`CoreError::NotFound`] / [`CoreError::PermissionDenied`] / [`CoreError::Io`]
///   for failures reported by the filesystem.
pub fn create_directory(parent: &Path, name: &str) -> CoreResult<PathBuf> {
    validate_name(name)?;

    let target = parent.join(name);
    if std::fs::symlink_metadata(&target).is_ok() {
        return Err(CoreError::AlreadyExists(target));
    }

    std::fs::create_dir(&target).map_err(|e| CoreError::from_io(e, &target))?;
    tracing::info!("created directory {}", target.display());
    Ok(target)
}

fn validate_name(name: &str) -> CoreResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidName("name cannot be empty".to_string()));
    }
    if trimmed == "." || trimmed == ".." {
        return Err(CoreError::InvalidName(name.to_string()));
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(CoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::entry::EntryKind;
    use std::fs;
    use tempfile::TempDir;

    fn names_of(entries: &[Entry], kind: EntryKind) -> Vec<String> {
        let mut names: Vec<String> = entries
            .iter()
            .filter(|e| e.kind() == kind)
            .map(|e| e.name().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn read_directory_classifies_files_and_dirs() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let entries = read_directory(tmp.path()).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(names_of(&entries, EntryKind::Directory), vec!["sub"]);
        assert_eq!(names_of(&entries, EntryKind::File), vec![".hidden", "a.txt"]);
        assert!(entries.iter().all(|e| e.kind() != EntryKind::ParentMarker));
    }

    #[test]
    fn read_directory_empty() {
        let tmp = TempDir::new().unwrap();
        let entries = read_directory(tmp.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn read_directory_missing_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = read_directory(&missing).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(p) if p == missing));
    }

    #[test]
    fn read_directory_on_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, "x").unwrap();
        let err = read_directory(&file).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn read_directory_follows_symlinks_and_skips_dangling_ones() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("dangling"))
            .unwrap();

        let entries = read_directory(tmp.path()).unwrap();

        assert_eq!(names_of(&entries, EntryKind::Directory), vec!["link", "real"]);
        assert!(names_of(&entries, EntryKind::File).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn read_directory_skips_sockets() {
        use std::os::unix::net::UnixListener;

        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("plain.txt"), "").unwrap();
        let _listener = UnixListener::bind(tmp.path().join("app.sock")).unwrap();

        let entries = read_directory(tmp.path()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(names_of(&entries, EntryKind::File), vec!["plain.txt"]);
    }

    #[test]
    fn create_directory_creates_child() {
        let tmp = TempDir::new().unwrap();
        let created = create_directory(tmp.path(), "new_dir").unwrap();
        assert_eq!(created, tmp.path().join("new_dir"));
        assert!(created.is_dir());
    }

    #[test]
    fn create_directory_existing_fails() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("taken")).unwrap();
        let err = create_directory(tmp.path(), "taken").unwrap_err();
        assert!(matches!(err, CoreError::AlreadyExists(_)));
    }

    #[test]
    fn create_directory_rejects_bad_names() {
        let tmp = TempDir::new().unwrap();
        for name in ["", "   ", ".", "..", "a/b", "a\\b"] {
            let err = create_directory(tmp.path(), name).unwrap_err();
            assert!(matches!(err, CoreError::InvalidName(_)), "accepted {name:?}");
        }
    }

    #[test]
    fn create_directory_in_missing_parent_fails() {
        let tmp = TempDir::new().unwrap();
        let err = create_directory(&tmp.path().join("missing"), "child").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
