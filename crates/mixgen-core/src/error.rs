//! Unified error handling for mixgen core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single surface for categories, suggestions, and exit-code mapping.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorCategory};

/// Root error type for mixgen core operations.
#[derive(Debug, Error, Clone)]
pub enum MixgenError {
    /// Errors from the domain layer (validation and template defects).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (execution failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl MixgenError {
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
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Convenient result type alias.
pub type MixgenResult<T> = Result<T, MixgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_errors_keep_their_category() {
        let err: MixgenError = DomainError::InvalidAppName {
            name: "X".into(),
            reason: "uppercase".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn template_defects_are_not_validation_errors() {
        let err: MixgenError = DomainError::UnknownTemplate { name: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Template);
    }

    #[test]
    fn collision_is_a_validation_error_with_suggestions() {
        let err: MixgenError = ApplicationError::DestinationExists {
            path: "/tmp/x".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
