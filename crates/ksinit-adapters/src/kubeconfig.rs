//! Kubeconfig reader.
//!
//! Reads the subset of the kubeconfig format needed to resolve a context:
//! cluster servers, context namespaces and the current context. Credentials
//! and everything else in the file are ignored.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use ksinit_core::{
    application::{ApplicationError, ports::ClusterConfigSource},
    domain::{ClusterConfig, ClusterCoordinates},
    error::KsResult,
};

/// Environment variable listing kubeconfig files.
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct KubeconfigFile {
    #[serde(default)]
    clusters: Option<Vec<NamedCluster>>,
    #[serde(default)]
    contexts: Option<Vec<NamedContext>>,
    #[serde(default)]
    current_context: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamedCluster {
    name: String,
    cluster: ClusterEntry,
}

#[derive(Debug, Deserialize)]
struct ClusterEntry {
    #[serde(default)]
    server: String,
}

#[derive(Debug, Deserialize)]
struct NamedContext {
    name: String,
    context: ContextEntry,
}

#[derive(Debug, Deserialize)]
struct ContextEntry {
    cluster: String,
    #[serde(default)]
    namespace: Option<String>,
}

/// [`ClusterConfigSource`] backed by one or more kubeconfig files.
///
/// Files are merged the way kubectl merges a `$KUBECONFIG` list: the first
/// definition of a cluster or context name wins, and the first non-empty
/// `current-context` wins. Missing files in the list are skipped.
#[derive(Debug, Clone)]
pub struct KubeconfigReader {
    paths: Vec<PathBuf>,
}

impl KubeconfigReader {
    /// Read exactly the given files, in order.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Read a single explicitly chosen file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(vec![path.into()])
    }

    /// Locate kubeconfig files from `$KUBECONFIG`, falling back to
    /// `~/.kube/config`.
    pub fn from_environment() -> Self {
        Self::from_env_value(std::env::var_os(KUBECONFIG_ENV), dirs::home_dir())
    }

    /// Resolution behind [`Self::from_environment`], with the environment
    /// passed in.
    pub fn from_env_value(kubeconfig: Option<OsString>, home: Option<PathBuf>) -> Self {
        let listed: Vec<PathBuf> = kubeconfig
            .filter(|value| !value.is_empty())
            .map(|value| {
                std::env::split_paths(&value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if !listed.is_empty() {
            return Self::new(listed);
        }

        let default = home
            .map(|home| home.join(".kube").join("config"))
            .into_iter()
            .collect();
        Self::new(default)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn searched(&self) -> String {
        if self.paths.is_empty() {
            return "<no candidate paths>".into();
        }
        self.paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ClusterConfigSource for KubeconfigReader {
    #[instrument(skip(self), fields(paths = %self.searched()))]
    fn load(&self) -> KsResult<ClusterConfig> {
        let existing: Vec<&PathBuf> = self.paths.iter().filter(|p| p.is_file()).collect();
        if existing.is_empty() {
            return Err(ApplicationError::ConfigNotFound {
                searched: self.searched(),
            }
            .into());
        }

        let mut servers: HashMap<String, String> = HashMap::new();
        let mut contexts: Vec<NamedContext> = Vec::new();
        let mut current_context: Option<String> = None;

        for path in existing {
            let file = read_file(path)?;
            debug!(path = %path.display(), "Loaded kubeconfig");

            for named in file.clusters.unwrap_or_default() {
                servers.entry(named.name).or_insert(named.cluster.server);
            }
            for named in file.contexts.unwrap_or_default() {
                if !contexts.iter().any(|c| c.name == named.name) {
                    contexts.push(named);
                }
            }
            if current_context.is_none() {
                current_context = file.current_context.filter(|c| !c.is_empty());
            }
        }

        let mut config = ClusterConfig::new();
        for named in contexts {
            let Some(server) = servers.get(&named.context.cluster) else {
                debug!(
                    context = %named.name,
                    cluster = %named.context.cluster,
                    "Skipping context with undefined cluster"
                );
                continue;
            };
            config.insert_context(
                named.name,
                ClusterCoordinates::new(server.clone(), named.context.namespace),
            );
        }
        if let Some(current) = current_context {
            config.set_current_context(current);
        }

        Ok(config)
    }
}

fn read_file(path: &Path) -> KsResult<KubeconfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to read kubeconfig: {e}"),
    })?;

    if content.trim().is_empty() {
        return Ok(KubeconfigFile::default());
    }

    serde_yaml::from_str(&content).map_err(|e| {
        ApplicationError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}
