//! Application layer errors.
//!
//! These errors represent failures while performing side effects, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that abort a generation run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A directory or file could not be created.
    #[error("failed to {operation} {}: {reason}", path.display())]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// The version control tool could not be run or exited non-zero.
    #[error("`{command}` failed in {}: {reason}", path.display())]
    VersionControl {
        command: String,
        path: PathBuf,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::VersionControl { command, .. } => vec![
                format!("Check that `{command}` works in your shell"),
                "Install git or re-run without --git".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::VersionControl { .. } => ErrorCategory::ExternalCommand,
        }
    }
}
