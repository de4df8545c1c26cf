//! Domain value objects: AppName, ClusterCoordinates, ApiSpecSource.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity, immutable
//! once constructed. Each parses from raw user input through a constructor
//! or `FromStr`, so an invalid value never reaches the application layer.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Namespace used when a context does not name one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Selector used when the user passes no `--api-spec`.
pub const DEFAULT_API_SPEC: &str = "version:v1.7.0";

const VERSION_PREFIX: &str = "version:";
const FILE_PREFIX: &str = "file:";

// ── AppName ──────────────────────────────────────────────────────────────────

/// Application identifier; doubles as the scaffold's root directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppName(String);

impl AppName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidAppName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name == "." || name == ".." {
            return Err(invalid("name cannot be a relative path component"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.contains('\0') {
            return Err(invalid("name cannot contain NUL bytes"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AppName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AppName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AppName> for String {
    fn from(name: AppName) -> Self {
        name.0
    }
}

// ── ClusterCoordinates ───────────────────────────────────────────────────────

/// Where an environment points: API server URI plus default namespace.
///
/// Both fields are resolved together. An empty server means the cluster is
/// unconfigured and the user is expected to edit `spec.json` later.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterCoordinates {
    server: String,
    namespace: String,
}

impl ClusterCoordinates {
    /// Coordinates for a known server. An empty namespace falls back to
    /// [`DEFAULT_NAMESPACE`].
    pub fn new(server: impl Into<String>, namespace: Option<String>) -> Self {
        let namespace = namespace
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        Self {
            server: server.into(),
            namespace,
        }
    }

    /// The empty value used when no cluster configuration exists at all.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Copy of these coordinates with the namespace replaced.
    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        Self {
            server: self.server.clone(),
            namespace: namespace.into(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_configured(&self) -> bool {
        !self.server.is_empty()
    }
}

// ── ApiSpecSource ────────────────────────────────────────────────────────────

/// Which OpenAPI document the generated library is bound against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiSpecSource {
    /// A Kubernetes release tag looked up in the built-in registry.
    VersionTag(String),
    /// A swagger document on local disk.
    FilePath(PathBuf),
    /// Fetch from the cluster's own API server.
    Live,
}

impl ApiSpecSource {
    /// Anchor a relative `file:` path at `base`. Other selectors are
    /// returned unchanged.
    pub fn resolved_against(self, base: &Path) -> Self {
        match self {
            Self::FilePath(path) if path.is_relative() => Self::FilePath(base.join(path)),
            other => other,
        }
    }
}

impl fmt::Display for ApiSpecSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionTag(tag) => write!(f, "{VERSION_PREFIX}{tag}"),
            Self::FilePath(path) => write!(f, "{FILE_PREFIX}{}", path.display()),
            Self::Live => Ok(()),
        }
    }
}

impl FromStr for ApiSpecSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Ok(Self::Live);
        }

        let invalid = || DomainError::InvalidSpecSelector {
            selector: s.to_string(),
        };

        if let Some(tag) = raw.strip_prefix(VERSION_PREFIX) {
            if tag.is_empty() {
                return Err(invalid());
            }
            return Ok(Self::VersionTag(tag.to_string()));
        }

        if let Some(path) = raw.strip_prefix(FILE_PREFIX) {
            if path.is_empty() {
                return Err(invalid());
            }
            return Ok(Self::FilePath(PathBuf::from(path)));
        }

        Err(invalid())
    }
}

impl Default for ApiSpecSource {
    fn default() -> Self {
        Self::VersionTag(
            DEFAULT_API_SPEC
                .trim_start_matches(VERSION_PREFIX)
                .to_string(),
        )
    }
}
