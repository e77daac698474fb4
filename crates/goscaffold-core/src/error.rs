//! Unified error handling for goscaffold-core.
//!
//! Wraps domain and application errors behind one type, with a category for
//! display styling and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for goscaffold-core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaffoldError {
    /// Parsing and invariant violations in the domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failures while performing side effects.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    ExternalCommand,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
