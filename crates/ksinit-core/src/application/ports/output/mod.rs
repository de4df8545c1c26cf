//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ksinit-adapters` crate provides implementations.

use crate::domain::{ApiSpecSource, ClusterConfig, ClusterCoordinates, GeneratedFile, SchemaDocument};
use crate::error::KsResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ksinit_adapters::filesystem::LocalFilesystem` (production)
/// - `ksinit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every write is a whole-file write; implementations must not leave a
/// handle open on any exit path.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create exactly one directory; the parent must already exist.
    ///
    /// Fails with `AppAlreadyExists` when anything is already at `path`, so
    /// two racing callers cannot both claim it.
    fn create_dir(&self, path: &Path) -> KsResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KsResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> KsResult<()>;

    /// Read a file's content.
    fn read_file(&self, path: &Path) -> KsResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the cluster-configuration file (kubeconfig).
///
/// Implemented by:
/// - `ksinit_adapters::kubeconfig::KubeconfigReader`
#[cfg_attr(test, mockall::automock)]
pub trait ClusterConfigSource: Send + Sync {
    /// Load all named contexts and the current-context marker.
    ///
    /// Fails with `ConfigNotFound` when no file exists and `ConfigParse`
    /// when the file is malformed.
    fn load(&self) -> KsResult<ClusterConfig>;
}

/// Port for retrieving the raw OpenAPI document.
///
/// Implemented by:
/// - `ksinit_adapters::schema::HttpSchemaFetcher` (registry, file, live cluster)
/// - `ksinit_adapters::schema::StaticSchemaFetcher` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait SchemaFetcher: Send + Sync {
    /// Fetch the document text for `spec`. `coordinates` supplies the server
    /// for [`ApiSpecSource::Live`].
    fn fetch(&self, spec: &ApiSpecSource, coordinates: &ClusterCoordinates) -> KsResult<String>;
}

/// Port for the schema-binding library generator.
///
/// Implemented by:
/// - `ksinit_adapters::generator::KsonnetLibGenerator`
#[cfg_attr(test, mockall::automock)]
pub trait LibraryGenerator: Send + Sync {
    /// Turn a schema document into library files, relative to the
    /// environment's metadata directory.
    fn generate(&self, schema: &SchemaDocument) -> KsResult<Vec<GeneratedFile>>;
}
