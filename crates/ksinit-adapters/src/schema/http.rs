//! Network and disk backed schema fetcher.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument};
use ureq::Agent;

use ksinit_core::{
    application::{ApplicationError, describe_source, ports::SchemaFetcher},
    domain::{ApiSpecSource, ClusterCoordinates},
    error::KsResult,
};

use super::registry;

/// Path of the OpenAPI document served by the API server.
const LIVE_SCHEMA_PATH: &str = "swagger.json";

#[derive(Debug, Error)]
enum FetchError {
    #[error("unknown Kubernetes version '{tag}' (known versions: {known})")]
    UnknownVersion { tag: String, known: String },

    #[error("no cluster server is configured")]
    NoServer,

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },
}

/// Resolves every [`ApiSpecSource`] variant:
///
/// - `version:TAG` through the built-in [`registry`],
/// - `file:PATH` from local disk,
/// - the live selector from `{server}/swagger.json`.
///
/// The returned text is not validated here.
#[derive(Clone)]
pub struct HttpSchemaFetcher {
    agent: Agent,
}

impl HttpSchemaFetcher {
    /// Fetcher without a request timeout.
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    /// Fetcher whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(timeout)
            .build()
            .into();
        Self { agent }
    }

    fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "Downloading API spec");
        let to_error = |source: ureq::Error| FetchError::Http {
            url: url.to_string(),
            source,
        };
        self.agent
            .get(url)
            .call()
            .map_err(to_error)?
            .body_mut()
            .read_to_string()
            .map_err(to_error)
    }

    fn fetch_raw(
        &self,
        spec: &ApiSpecSource,
        coordinates: &ClusterCoordinates,
    ) -> Result<String, FetchError> {
        match spec {
            ApiSpecSource::VersionTag(tag) => {
                let url = registry::url_for(tag).ok_or_else(|| FetchError::UnknownVersion {
                    tag: tag.clone(),
                    known: registry::known_versions(),
                })?;
                self.get(&url)
            }
            ApiSpecSource::FilePath(path) => {
                std::fs::read_to_string(path).map_err(|source| FetchError::Read {
                    path: path.clone(),
                    source,
                })
            }
            ApiSpecSource::Live => {
                if !coordinates.is_configured() {
                    return Err(FetchError::NoServer);
                }
                self.get(&live_url(coordinates.server()))
            }
        }
    }
}

impl Default for HttpSchemaFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaFetcher for HttpSchemaFetcher {
    #[instrument(skip(self, coordinates), fields(source = %describe_source(spec, coordinates)))]
    fn fetch(&self, spec: &ApiSpecSource, coordinates: &ClusterCoordinates) -> KsResult<String> {
        self.fetch_raw(spec, coordinates).map_err(|e| {
            ApplicationError::SchemaFetch {
                source_desc: describe_source(spec, coordinates),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn live_url(server: &str) -> String {
    format!("{}/{LIVE_SCHEMA_PATH}", server.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ksinit_core::error::KsError;

    fn fetch_error(spec: &ApiSpecSource, coords: &ClusterCoordinates) -> (String, String) {
        match HttpSchemaFetcher::new().fetch(spec, coords).unwrap_err() {
            KsError::Application(ApplicationError::SchemaFetch {
                source_desc,
                reason,
            }) => (source_desc, reason),
            other => panic!("expected SchemaFetch, got {other:?}"),
        }
    }

    #[test]
    fn reads_file_selector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swagger.json");
        std::fs::write(&path, r#"{"swagger":"2.0"}"#).unwrap();

        let raw = HttpSchemaFetcher::new()
            .fetch(
                &ApiSpecSource::FilePath(path),
                &ClusterCoordinates::unconfigured(),
            )
            .unwrap();
        assert_eq!(raw, r#"{"swagger":"2.0"}"#);
    }

    #[test]
    fn missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let spec = ApiSpecSource::FilePath(dir.path().join("absent.json"));
        let (source_desc, reason) = fetch_error(&spec, &ClusterCoordinates::unconfigured());
        assert!(source_desc.starts_with("file:"));
        assert!(reason.contains("absent.json"));
    }

    #[test]
    fn unknown_version_is_fetch_error_without_network() {
        let spec = ApiSpecSource::VersionTag("v0.1.0".into());
        let (source_desc, reason) = fetch_error(&spec, &ClusterCoordinates::unconfigured());
        assert_eq!(source_desc, "version:v0.1.0");
        assert!(reason.contains("unknown Kubernetes version 'v0.1.0'"));
    }

    #[test]
    fn live_without_server_is_fetch_error() {
        let (source_desc, reason) =
            fetch_error(&ApiSpecSource::Live, &ClusterCoordinates::unconfigured());
        assert_eq!(source_desc, "live cluster (unconfigured)");
        assert_eq!(reason, "no cluster server is configured");
    }

    #[test]
    fn live_url_joins_server() {
        assert_eq!(
            live_url("https://10.0.0.1:6443/"),
            "https://10.0.0.1:6443/swagger.json"
        );
        assert_eq!(
            live_url("https://10.0.0.1:6443"),
            "https://10.0.0.1:6443/swagger.json"
        );
    }
}
