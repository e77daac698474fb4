use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {:?}",
            path
        );
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Join a segment, maintaining the relative invariant.
    ///
    /// # Panics
    /// Panics if `segment` is absolute.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        let segment = segment.as_ref();
        assert!(
            !segment.is_absolute(),
            "cannot join absolute path to RelativePath: {:?}",
            segment
        );
        Self(self.0.join(segment))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RelativePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_accepts_relative() {
        let p = RelativePath::new("cmd/demo/main.go");
        assert_eq!(p.as_path(), Path::new("cmd/demo/main.go"));
    }

    #[test]
    #[should_panic]
    fn relative_path_rejects_absolute() {
        RelativePath::new("/etc/passwd");
    }

    #[test]
    fn try_new_rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn join_keeps_path_relative() {
        let joined = RelativePath::new("cmd").join("demo").join("main.go");
        assert_eq!(joined.as_path(), Path::new("cmd/demo/main.go"));
        assert!(!joined.as_path().is_absolute());
    }

    #[test]
    #[should_panic]
    fn join_rejects_absolute_segment() {
        RelativePath::new("src").join("/etc/passwd");
    }
}
