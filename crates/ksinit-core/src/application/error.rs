//! Application layer errors.
//!
//! These errors represent failures while talking to the outside world
//! (kubeconfig, schema sources, filesystem). Input validation errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No cluster-configuration file could be located.
    #[error("No kubeconfig found (looked in: {searched})")]
    ConfigNotFound { searched: String },

    /// The cluster-configuration file exists but could not be understood.
    #[error("Failed to parse kubeconfig {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// The requested context is not defined.
    #[error("Context '{name}' not found in kubeconfig")]
    ContextNotFound { name: String },

    /// The application root already exists.
    #[error("Application directory already exists at {path}")]
    AppAlreadyExists { path: PathBuf },

    /// The schema document could not be retrieved.
    #[error("Failed to fetch API spec from '{source_desc}': {reason}")]
    SchemaFetch { source_desc: String, reason: String },

    /// The schema document was retrieved but is not usable.
    #[error("Failed to parse API spec from '{source_desc}': {reason}")]
    SchemaParse { source_desc: String, reason: String },

    /// The schema-binding generator failed.
    #[error("Library generation failed: {reason}")]
    GeneratorFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("In-memory store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigNotFound { .. } => vec![
                "Set $KUBECONFIG or create ~/.kube/config".into(),
                "Or pass --kubeconfig <file>".into(),
            ],
            Self::ConfigParse { path, .. } => vec![
                format!("Check the YAML in {}", path.display()),
                "Try: kubectl config view".into(),
            ],
            Self::ContextNotFound { name } => vec![
                format!("No context named '{}' exists", name),
                "Try: kubectl config get-contexts".into(),
                "Omit --context to use the current context".into(),
            ],
            Self::AppAlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different application name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::SchemaFetch { source_desc, .. } => vec![
                format!("Could not retrieve the API spec from '{}'", source_desc),
                "Check your network connection and the cluster address".into(),
                "Or use --api-spec=file:<swagger.json> to work offline".into(),
            ],
            Self::SchemaParse { .. } => vec![
                "The API spec must be a Kubernetes OpenAPI (swagger.json) document".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. } | Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::ContextNotFound { .. } => ErrorCategory::NotFound,
            Self::AppAlreadyExists { .. } | Self::SchemaParse { .. } => ErrorCategory::Validation,
            Self::SchemaFetch { .. } => ErrorCategory::Network,
            Self::GeneratorFailed { .. } | Self::Io { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
