//! Path arithmetic used by directory navigation.
//!
//! Root detection and parent/base-name extraction depend on the platform's
//! path flavour. Instead of scattering `cfg` branches, every rule lives on
//! [`PathStyle`], which is picked once from configuration or from the
//! compiled target via [`PathStyle::native`].

use std::path::{Component, Path, PathBuf};

/// The literal up-navigation token, shown as the parent marker entry.
pub const PARENT_TOKEN: &str = "..";

/// Separator and root rules for one family of platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// Single `/` root, `/` separator.
    Posix,
    /// Drive-letter roots (`C:\`, `C:`), `\` preferred, `/` accepted.
    Drive,
}

impl PathStyle {
    /// The style matching the target this crate was compiled for.
    pub const fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Drive
        } else {
            PathStyle::Posix
        }
    }

    /// The preferred separator for this style.
    pub const fn separator(self) -> char {
        match self {
            PathStyle::Posix => '/',
            PathStyle::Drive => '\\',
        }
    }

    fn is_separator(self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Drive => c == '\\' || c == '/',
        }
    }

    /// Length in bytes of the root prefix of `s` (`0` for relative paths).
    fn root_len(self, s: &str) -> usize {
        let bytes = s.as_bytes();
        match self {
            PathStyle::Posix => usize::from(bytes.first() == Some(&b'/')),
            PathStyle::Drive => {
                if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
                    let rooted = s[2..].chars().next().is_some_and(|c| self.is_separator(c));
                    2 + usize::from(rooted)
                } else {
                    usize::from(s.chars().next().is_some_and(|c| self.is_separator(c)))
                }
            }
        }
    }

    /// Strips trailing separators without eating into the root.
    fn trim_trailing<'a>(self, s: &'a str) -> &'a str {
        let root = self.root_len(s);
        let mut end = s.len();
        while end > root && s[..end].ends_with(|c| self.is_separator(c)) {
            end -= 1;
        }
        &s[..end]
    }

    /// Returns `true` if `path` denotes a filesystem root (`/`, `C:\`, `C:`).
    pub fn is_root(self, path: &Path) -> bool {
        let s = path.to_string_lossy();
        let trimmed = self.trim_trailing(&s);
        let root = self.root_len(trimmed);
        root > 0 && trimmed.len() == root
    }

    /// Returns `true` unless `path` is a root (or a bare relative name).
    pub fn has_parent(self, path: &Path) -> bool {
        self.parent_of(path).is_some()
    }

    /// Strips the last component of `path`.
    ///
    /// Returns `None` exactly when [`has_parent`](Self::has_parent) is `false`.
    pub fn parent_of(self, path: &Path) -> Option<PathBuf> {
        // Non-UTF-8 paths only come from the host filesystem.
        let Some(s) = path.to_str() else {
            return path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf);
        };
        let trimmed = self.trim_trailing(s);
        let root = self.root_len(trimmed);
        if trimmed.len() <= root {
            return None;
        }

        match trimmed[root..].rfind(|c| self.is_separator(c)) {
            Some(idx) => {
                let parent = self.trim_trailing(&trimmed[..root + idx]);
                if parent.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(parent))
                }
            }
            None if root > 0 => Some(PathBuf::from(&trimmed[..root])),
            None => None,
        }
    }

    /// The last path component, or an empty string for a root.
    pub fn base_name(self, path: &Path) -> String {
        let s = path.to_string_lossy();
        let trimmed = self.trim_trailing(&s);
        let root = self.root_len(trimmed);
        let rest = &trimmed[root..];
        match rest.rfind(|c| self.is_separator(c)) {
            Some(idx) => rest[idx + 1..].to_string(),
            None => rest.to_string(),
        }
    }

    /// Rewrites separators to the preferred one for this style.
    pub fn make_preferred(self, path: &Path) -> PathBuf {
        match self {
            PathStyle::Posix => path.to_path_buf(),
            PathStyle::Drive => {
                PathBuf::from(path.to_string_lossy().replace('/', &self.separator().to_string()))
            }
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        PathStyle::native()
    }
}

/// Resolves `path` to an absolute, lexically cleaned form.
///
/// `.` components are dropped and `..` pops the preceding component. If the
/// path cannot be made absolute (no working directory, empty input), the
/// input is returned unchanged.
pub fn normalize(path: &Path) -> PathBuf {
    let absolute = match std::path::absolute(path) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("cannot absolutize {}: {e}", path.display());
            return path.to_path_buf();
        }
    };

    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    PathStyle::native().make_preferred(&cleaned)
}
