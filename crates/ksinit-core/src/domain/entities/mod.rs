pub mod app_manifest;
pub mod cluster_config;
pub mod common;
pub mod scaffold;
pub mod schema;

pub use crate::domain::DomainError;
pub use app_manifest::{AppManifest, EnvironmentSpec};
pub use cluster_config::ClusterConfig;
pub use scaffold::ScaffoldLayout;
pub use schema::{GeneratedFile, SchemaDocument};
