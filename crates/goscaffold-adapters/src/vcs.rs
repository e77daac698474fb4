//! Version control adapters.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use goscaffold_core::{
    application::{ApplicationError, ports::VersionControl},
    error::ScaffoldResult,
};
use tracing::{debug, info};

/// Runs `git init` in the project directory.
///
/// Blocking, no timeout. A missing binary or non-zero exit is reported as
/// [`ApplicationError::VersionControl`] with the captured stderr.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a different executable, e.g. an absolute path to git.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self) -> String {
        format!("{} init", self.program)
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn init(&self, path: &Path) -> ScaffoldResult<()> {
        info!(path = %path.display(), "Initializing git repository");

        let output = Command::new(&self.program)
            .arg("init")
            .current_dir(path)
            .output()
            .map_err(|e| ApplicationError::VersionControl {
                command: self.command_line(),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::VersionControl {
                command: self.command_line(),
                path: path.to_path_buf(),
                reason: format!("{} ({})", stderr.trim(), output.status),
            }
            .into());
        }

        debug!(stdout = %String::from_utf8_lossy(&output.stdout).trim(), "git init finished");
        Ok(())
    }
}

/// Records `init` calls instead of running anything (testing).
#[derive(Debug, Clone, Default)]
pub struct RecordingVersionControl {
    calls: Arc<Mutex<Vec<PathBuf>>>,
    fail: bool,
}

impl RecordingVersionControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// A double whose `init` always fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Paths `init` was called with, in order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl VersionControl for RecordingVersionControl {
    fn init(&self, path: &Path) -> ScaffoldResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(path.to_path_buf());
        }
        if self.fail {
            return Err(ApplicationError::VersionControl {
                command: "git init".into(),
                path: path.to_path_buf(),
                reason: "simulated failure".into(),
            }
            .into());
        }
        Ok(())
    }
}
