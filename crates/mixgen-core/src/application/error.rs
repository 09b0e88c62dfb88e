//! Application layer errors.
//!
//! These errors represent failures in orchestration and the filesystem
//! collaborator, not business logic. Business logic errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur while executing a generation plan.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The destination project directory already exists.
    #[error("destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// A file an operation wanted to create is already present.
    #[error("refusing to overwrite existing file: {path}")]
    PathCollision { path: PathBuf },

    /// Filesystem operation failed (permissions, disk, ...).
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Shared state poisoned (test doubles only in practice).
    #[error("filesystem state poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project path".into(),
                format!("Or remove it first: rm -rf {}", path.display()),
            ],
            Self::PathCollision { path } => vec![
                format!("'{}' already exists in the destination", path.display()),
                "Generation is create-only; it never overwrites files".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files already written were left in place".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Error category for display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationExists { .. } | Self::PathCollision { .. } => {
                ErrorCategory::Validation
            }
            Self::Filesystem { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
