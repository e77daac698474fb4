// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The generation engine assumes a pre-validated configuration, so the
/// domain only fails on parsing user-facing values and on path invariants.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown template kind '{0}'")]
    UnknownTemplateKind(String),

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplateKind(kind) => vec![
                format!("'{kind}' is not a known template"),
                "Available templates: basic, cli, api, grpc, library".into(),
                "Try: goscaffold templates".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Generated paths must be relative: {path}"),
                "This is likely a bug in a template builder".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplateKind(_) => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
