//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `goscaffold_adapters::filesystem::LocalFilesystem` (production)
/// - `goscaffold_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write `content` as the complete body of `path`, creating missing
    /// parent directories and truncating an existing file.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
}

/// Port for initialising a repository in a freshly generated project.
///
/// Implemented by:
/// - `goscaffold_adapters::vcs::GitCli` (runs `git init`)
/// - `goscaffold_adapters::vcs::RecordingVersionControl` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Initialise a repository with `path` as its working tree.
    fn init(&self, path: &Path) -> ScaffoldResult<()>;
}
