//! Local filesystem adapter using std::fs.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use goscaffold_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffoldError, ScaffoldResult},
};
use tracing::trace;

/// Mode for created directories on Unix.
pub const DIR_MODE: u32 = 0o755;
/// Mode for created files on Unix.
pub const FILE_MODE: u32 = 0o644;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }

        trace!(path = %path.display(), bytes = content.len(), "write_file");
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> ScaffoldError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
