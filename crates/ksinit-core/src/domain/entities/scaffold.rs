use std::path::{Path, PathBuf};

use crate::domain::entities::app_manifest::DEFAULT_ENVIRONMENT;

pub const METADATA_DIR: &str = ".ksonnet";
pub const APP_MANIFEST_FILE: &str = "app.yaml";
pub const COMPONENTS_DIR: &str = "components";
pub const ENVIRONMENTS_DIR: &str = "environments";
pub const ENV_SPEC_FILE: &str = "spec.json";
pub const ENV_METADATA_DIR: &str = ".metadata";
pub const LIB_DIR: &str = "lib";
pub const VENDOR_DIR: &str = "vendor";

/// The on-disk tree of an initialized application.
///
/// Paths are derived from the root; later tooling depends on these exact
/// names, so they are fixed here rather than configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldLayout {
    root: PathBuf,
}

impl ScaffoldLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join(METADATA_DIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(APP_MANIFEST_FILE)
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(COMPONENTS_DIR)
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.root.join(LIB_DIR)
    }

    pub fn vendor_dir(&self) -> PathBuf {
        self.root.join(VENDOR_DIR)
    }

    pub fn environments_dir(&self) -> PathBuf {
        self.root.join(ENVIRONMENTS_DIR)
    }

    pub fn environment_dir(&self) -> PathBuf {
        self.environments_dir().join(DEFAULT_ENVIRONMENT)
    }

    pub fn environment_spec_path(&self) -> PathBuf {
        self.environment_dir().join(ENV_SPEC_FILE)
    }

    pub fn environment_metadata_dir(&self) -> PathBuf {
        self.environment_dir().join(ENV_METADATA_DIR)
    }

    /// Fixed directories created before anything is written.
    pub fn base_directories(&self) -> [PathBuf; 4] {
        [
            self.metadata_dir(),
            self.components_dir(),
            self.lib_dir(),
            self.vendor_dir(),
        ]
    }
}
