//! Unified error handling for ksinit Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for ksinit Core operations.
///
/// Every failure is terminal for the current `init` attempt; nothing in the
/// core retries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KsError {
    /// Errors from the domain layer (invalid names, selectors).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (kubeconfig, schema, filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl KsError {
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

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Network,
    Internal,
}

/// Convenient result type alias.
pub type KsResult<T> = Result<T, KsError>;
