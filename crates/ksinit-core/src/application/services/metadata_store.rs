//! Metadata Store - persistence for `app.yaml` and environment `spec.json`.

use std::path::Path;

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{AppManifest, EnvironmentSpec},
    error::KsResult,
};

/// Serializes application metadata and writes it through a [`Filesystem`].
///
/// Each call is a single whole-file write.
pub struct MetadataStore<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> MetadataStore<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write the application manifest as YAML to `path`.
    pub fn write_manifest(&self, path: &Path, manifest: &AppManifest) -> KsResult<()> {
        let content = serde_yaml::to_string(manifest).map_err(|e| ApplicationError::Io {
            path: path.to_path_buf(),
            reason: format!("Failed to serialize manifest: {e}"),
        })?;
        self.filesystem.write_file(path, &content)?;
        debug!(path = %path.display(), "Wrote app manifest");
        Ok(())
    }

    /// Read the application manifest back from `path`.
    pub fn read_manifest(&self, path: &Path) -> KsResult<AppManifest> {
        let content = self.filesystem.read_file(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            ApplicationError::Io {
                path: path.to_path_buf(),
                reason: format!("Failed to parse manifest: {e}"),
            }
            .into()
        })
    }

    /// Write an environment spec as pretty JSON to `path`.
    pub fn write_environment_spec(&self, path: &Path, spec: &EnvironmentSpec) -> KsResult<()> {
        let mut content = serde_json::to_string_pretty(spec).map_err(|e| ApplicationError::Io {
            path: path.to_path_buf(),
            reason: format!("Failed to serialize environment spec: {e}"),
        })?;
        content.push('\n');
        self.filesystem.write_file(path, &content)?;
        debug!(path = %path.display(), "Wrote environment spec");
        Ok(())
    }

    /// Read an environment spec back from `path`.
    pub fn read_environment_spec(&self, path: &Path) -> KsResult<EnvironmentSpec> {
        let content = self.filesystem.read_file(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ApplicationError::Io {
                path: path.to_path_buf(),
                reason: format!("Failed to parse environment spec: {e}"),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{ApiSpecSource, AppName, ClusterCoordinates};
    use crate::error::KsError;

    #[test]
    fn manifest_is_written_as_yaml() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/app/app.yaml")
                    && content.contains("kind: ksonnet.io/app")
                    && content.contains("name: guestbook")
                    && content.contains("2017-09-01T12:00:00Z")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let created = Utc.with_ymd_and_hms(2017, 9, 1, 12, 0, 0).unwrap();
        let manifest = AppManifest::new(AppName::new("guestbook").unwrap(), created);
        MetadataStore::new(&fs)
            .write_manifest(Path::new("/app/app.yaml"), &manifest)
            .unwrap();
    }

    #[test]
    fn environment_spec_round_trips() {
        let coords = ClusterCoordinates::new("https://k8s:6443", Some("dev".into()));
        let spec = EnvironmentSpec::new(&coords, &ApiSpecSource::Live);
        let json = serde_json::to_string_pretty(&spec).unwrap() + "\n";

        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .withf({
                let expected = json.clone();
                move |path, content| path == Path::new("/app/spec.json") && content == expected
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_read_file()
            .returning(move |_| Ok(json.clone()));

        let store = MetadataStore::new(&fs);
        let path = Path::new("/app/spec.json");
        store.write_environment_spec(path, &spec).unwrap();
        assert_eq!(store.read_environment_spec(path).unwrap(), spec);
    }

    #[test]
    fn write_failure_surfaces_io_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::Io {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let spec = EnvironmentSpec::new(&ClusterCoordinates::unconfigured(), &ApiSpecSource::Live);
        let err = MetadataStore::new(&fs)
            .write_environment_spec(Path::new("/ro/spec.json"), &spec)
            .unwrap_err();
        assert!(matches!(err, KsError::Application(ApplicationError::Io { .. })));
    }
}
