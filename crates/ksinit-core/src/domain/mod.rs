// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for ksinit.
//!
//! This module contains pure data and validation with no I/O. Reading the
//! kubeconfig, fetching schemas and touching the filesystem are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or environment access
//! - **Immutable values**: Coordinates and selectors cannot change once parsed
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    app_manifest::{AppManifest, DEFAULT_ENVIRONMENT, EnvironmentSpec, KSONNET_LIB_VERSION},
    cluster_config::ClusterConfig,
    common::RelativePath,
    scaffold::ScaffoldLayout,
    schema::{GeneratedFile, SchemaDocument},
};

pub use error::DomainError;

pub use value_objects::{
    ApiSpecSource, AppName, ClusterCoordinates, DEFAULT_API_SPEC, DEFAULT_NAMESPACE,
};
