//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "resolve a context" or "scaffold an app".

pub mod context_resolver;
pub mod init_service;
pub mod metadata_store;
pub mod scaffold_service;

pub use context_resolver::ContextResolver;
pub use init_service::{InitOptions, InitService};
pub use metadata_store::MetadataStore;
pub use scaffold_service::{ScaffoldService, describe_source};
