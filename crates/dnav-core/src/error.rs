//! Error types for `dnav-core`.
//!
//! Fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`. Directory loading never
//! surfaces these to callers; see [`crate::fs::snapshot::DirectorySnapshot::load`].

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The path to be created is already taken.
    #[error("already exists: {0}")]
    AlreadyExists(PathBuf),

    /// A file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// A panel operation was requested while no panel holds focus.
    #[error("no active panel")]
    NoActivePanel,

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The log sink could not be set up.
    #[error("logging error: {0}")]
    Logging(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Classifies an I/O error raised while touching `path`.
    pub(crate) fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => CoreError::AlreadyExists(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `dnav-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "path not found: /missing/dir");
    }

    #[test]
    fn not_a_directory_displays_path() {
        let err = CoreError::NotADirectory(PathBuf::from("/some/file.txt"));
        assert_eq!(err.to_string(), "not a directory: /some/file.txt");
    }

    #[test]
    fn already_exists_displays_path() {
        let err = CoreError::AlreadyExists(PathBuf::from("/tmp/new"));
        assert_eq!(err.to_string(), "already exists: /tmp/new");
    }

    #[test]
    fn invalid_name_displays_message() {
        let err = CoreError::InvalidName("bad/name".to_string());
        assert_eq!(err.to_string(), "invalid name: bad/name");
    }

    #[test]
    fn no_active_panel_displays_message() {
        assert_eq!(CoreError::NoActivePanel.to_string(), "no active panel");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = io::Error::new(io::ErrorKind::Other, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn from_io_classifies_known_kinds() {
        let path = Path::new("/x");
        let not_found = CoreError::from_io(io::Error::from(io::ErrorKind::NotFound), path);
        assert!(matches!(not_found, CoreError::NotFound(p) if p == path));

        let denied = CoreError::from_io(io::Error::from(io::ErrorKind::PermissionDenied), path);
        assert!(matches!(denied, CoreError::PermissionDenied(_)));

        let exists = CoreError::from_io(io::Error::from(io::ErrorKind::AlreadyExists), path);
        assert!(matches!(exists, CoreError::AlreadyExists(_)));

        let other = CoreError::from_io(io::Error::from(io::ErrorKind::Interrupted), path);
        assert!(matches!(other, CoreError::Io(_)));
    }
}
