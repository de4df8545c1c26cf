//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `KSINIT_*` environment variables, `__` between nested keys
//!    (`KSINIT_CLUSTER__FETCH_TIMEOUT_SECS=30`)
//! 3. Config file (`--config FILE`, else the per-user location)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use ksinit_core::domain::DEFAULT_API_SPEC;

/// Prefix of every configuration environment variable.
pub const ENV_PREFIX: &str = "KSINIT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `ks init` flags.
    pub defaults: Defaults,
    /// Cluster access settings.
    pub cluster: ClusterSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Selector used when `--api-spec` is not given.
    pub api_spec: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSettings {
    /// Kubeconfig used when neither `--kubeconfig` nor `$KUBECONFIG` is set.
    pub kubeconfig: Option<PathBuf>,
    /// Give up on schema downloads after this many seconds.
    pub fetch_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            api_spec: DEFAULT_API_SPEC.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is only
    /// read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::build(path, true, None),
            None => Self::build(&Self::config_path(), false, None),
        }
    }

    /// Layer `path` and the environment over the defaults. `env` replaces
    /// the process environment when given.
    fn build(
        path: &Path,
        required: bool,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .ignore_empty(true)
            .source(env);

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(environment)
            .build()
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?
            .try_deserialize()
            .context("Invalid configuration value")
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.cluster.fetch_timeout_secs.map(Duration::from_secs)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ksinit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "ksinit", "ksinit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".ksinit.toml"))
    }
}
