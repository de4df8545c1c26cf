//! ksinit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for bootstrapping
//! a ksonnet-style application workspace, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            ksinit-cli (ks)              │
//! │   (Builds InitOptions, wires adapters)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ContextResolver, ScaffoldService,     │
//! │   MetadataStore)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, ClusterConfigSource,      │
//! │   SchemaFetcher, LibraryGenerator)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    ksinit-adapters (Infrastructure)     │
//! │ (Kubeconfig, HTTP fetch, LocalFs, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ksinit_core::{
//!     application::{ContextResolver, ScaffoldService},
//!     domain::{ApiSpecSource, AppName},
//! };
//!
//! let resolver = ContextResolver::new(kubeconfig);
//! let coordinates = resolver.resolve(None)?;
//!
//! let service = ScaffoldService::new(filesystem, fetcher, generator);
//! let name = AppName::new("guestbook")?;
//! let spec: ApiSpecSource = "version:v1.7.0".parse()?;
//! service.generate(&name, "/work/guestbook", &spec, &coordinates)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ContextResolver, InitOptions, InitService, MetadataStore, ScaffoldService,
        ports::{ClusterConfigSource, Filesystem, LibraryGenerator, SchemaFetcher},
    };
    pub use crate::domain::{
        ApiSpecSource, AppManifest, AppName, ClusterConfig, ClusterCoordinates, EnvironmentSpec,
        GeneratedFile, ScaffoldLayout, SchemaDocument,
    };
    pub use crate::error::{KsError, KsResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
