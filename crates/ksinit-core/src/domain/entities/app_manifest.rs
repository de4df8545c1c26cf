use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ApiSpecSource, AppName, ClusterCoordinates};

/// Name of the environment every new application starts with.
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// Version of the `app.yaml` schema written by this tool.
pub const MANIFEST_API_VERSION: &str = "0.0.1";

/// Kind marker for the application manifest.
pub const MANIFEST_KIND: &str = "ksonnet.io/app";

/// Version pin of the generated schema-binding library.
pub const KSONNET_LIB_VERSION: &str = "0.1.0";

/// The application manifest persisted as `app.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppManifest {
    pub api_version: String,
    pub kind: String,
    pub name: AppName,
    pub version: String,
    pub lib_version: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub environments: Vec<String>,
}

impl AppManifest {
    /// Manifest for a freshly initialized application.
    pub fn new(name: AppName, created_at: DateTime<Utc>) -> Self {
        Self {
            api_version: MANIFEST_API_VERSION.into(),
            kind: MANIFEST_KIND.into(),
            name,
            version: "0.0.1".into(),
            lib_version: KSONNET_LIB_VERSION.into(),
            created_at,
            environments: vec![DEFAULT_ENVIRONMENT.into()],
        }
    }
}

/// An environment's target, persisted as `environments/<name>/spec.json`.
///
/// Empty `server`/`namespace` values mean the environment is unconfigured
/// and must be edited by hand before deploying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSpec {
    pub server: String,
    pub namespace: String,
    pub api_spec: String,
}

impl EnvironmentSpec {
    pub fn new(coordinates: &ClusterCoordinates, spec: &ApiSpecSource) -> Self {
        Self {
            server: coordinates.server().to_string(),
            namespace: coordinates.namespace().to_string(),
            api_spec: spec.to_string(),
        }
    }
}
