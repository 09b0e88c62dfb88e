use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (user input)
    // ========================================================================
    #[error("invalid application name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    #[error("unknown database adapter '{adapter}'")]
    UnknownAdapter {
        adapter: String,
        available: Vec<&'static str>, // populated from database::adapter_keys()
    },

    // ========================================================================
    // Template Errors (packaging/programming defects, not user input)
    // ========================================================================
    #[error("no template registered under '{name}'")]
    UnknownTemplate { name: String },

    #[error("template registered twice under '{name}'")]
    DuplicateTemplate { name: String },

    #[error("unbound template variable '{name}'")]
    UnboundVariable { name: String },

    #[error("unbound conditional flag '{name}'")]
    UnboundFlag { name: String },

    #[error("malformed template: {reason}")]
    MalformedTemplate { reason: String },

    #[error("absolute destination paths not allowed: {path}")]
    AbsoluteDestination { path: String },

    #[error("template '{name}' rendered an empty destination path")]
    EmptyDestination { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAppName { reason, .. } => vec![
                format!("Application names follow Elixir atom rules: {}", reason),
                "Use lowercase letters, digits, and underscores, starting with a letter".into(),
                "Examples: shop, my_app, billing2".into(),
            ],
            Self::InvalidModuleName { reason, .. } => vec![
                format!("Module names follow Elixir alias rules: {}", reason),
                "Use CamelCase segments separated by dots".into(),
                "Examples: Shop, MyApp, Billing.Core".into(),
            ],
            Self::UnknownAdapter { adapter, available } => {
                let mut out = vec![
                    format!("'{}' is not a supported database adapter", adapter),
                    "Supported adapters:".into(),
                ];
                for key in available {
                    out.push(format!("  \u{2022} {key}"));
                }
                out.push("Example: mixgen new shop --ecto --db postgres".into());
                out
            }
            Self::UnknownTemplate { name } | Self::DuplicateTemplate { name } => vec![
                format!("Template table is inconsistent around '{}'", name),
                "This is a packaging bug in mixgen, please report it".into(),
            ],
            Self::UnboundVariable { name } | Self::UnboundFlag { name } => vec![
                format!("A built-in template references '{}' but no generator bound it", name),
                "This is a packaging bug in mixgen, please report it".into(),
            ],
            _ => vec!["This is a packaging bug in mixgen, please report it".into()],
        }
    }

    /// Error category for CLI display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAppName { .. }
            | Self::InvalidModuleName { .. }
            | Self::UnknownAdapter { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Template,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Internal,
}
