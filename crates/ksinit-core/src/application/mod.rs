//! Application layer for ksinit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InitService, ContextResolver, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Parsing and
//! validation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ContextResolver, InitOptions, InitService, MetadataStore, ScaffoldService, describe_source,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ClusterConfigSource, Filesystem, LibraryGenerator, SchemaFetcher};

pub use error::ApplicationError;
