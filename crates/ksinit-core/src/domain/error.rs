// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Raised while turning raw user input into domain values, before any I/O.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid API spec selector '{selector}'")]
    InvalidSpecSelector { selector: String },

    #[error("Invalid application name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("Path '{path}' must be relative and stay inside its parent directory")]
    UnsafeRelativePath { path: String },

    #[error("Malformed schema document: {reason}")]
    MalformedSchema { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSpecSelector { .. } => vec![
                "Use one of the supported selector forms:".into(),
                "  • version:<tag>   e.g. version:v1.7.0".into(),
                "  • file:<path>     e.g. file:swagger.json".into(),
                "Pass an empty value (--api-spec=\"\") to read the schema from the cluster".into(),
            ],
            Self::InvalidAppName { name, reason } => vec![
                format!("Application name '{}' is invalid: {}", name, reason),
                "The name becomes a directory, so it must be a single path segment".into(),
                "Examples: guestbook, my-app, app_01".into(),
            ],
            Self::UnsafeRelativePath { path } => vec![
                format!("The library generator produced an unsafe path: {}", path),
                "This is likely a bug in the generator, please report it".into(),
            ],
            Self::MalformedSchema { reason } => vec![
                format!("The schema document could not be used: {}", reason),
                "Point --api-spec at a Kubernetes swagger.json (OpenAPI) document".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSpecSelector { .. } | Self::InvalidAppName { .. } => {
                ErrorCategory::Validation
            }
            Self::MalformedSchema { .. } => ErrorCategory::Validation,
            Self::UnsafeRelativePath { .. } => ErrorCategory::Internal,
        }
    }
}
