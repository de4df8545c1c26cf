//! Infrastructure adapters for ksinit.
//!
//! This crate implements the ports defined in `ksinit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod generator;
pub mod kubeconfig;
pub mod schema;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::KsonnetLibGenerator;
pub use kubeconfig::KubeconfigReader;
pub use schema::{HttpSchemaFetcher, StaticSchemaFetcher};
