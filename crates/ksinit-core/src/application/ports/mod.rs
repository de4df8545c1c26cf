//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ksinit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ClusterConfigSource`: Named cluster contexts
//!   - `SchemaFetcher`: OpenAPI document retrieval
//!   - `LibraryGenerator`: Schema-binding code generation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ClusterConfigSource, Filesystem, LibraryGenerator, SchemaFetcher};

#[cfg(test)]
pub use output::{MockClusterConfigSource, MockFilesystem, MockLibraryGenerator, MockSchemaFetcher};
