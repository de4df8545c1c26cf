//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffold-generation workflow:
//! 1. Check the application root does not exist
//! 2. Create the fixed directory tree
//! 3. Write the application manifest
//! 4. Create the default environment and write its spec
//! 5. Resolve the schema document
//! 6. Generate the schema-binding library into the environment
//!
//! A failing step aborts the remaining ones. Completed steps are not rolled
//! back, so a half-created tree may be left behind.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, LibraryGenerator, SchemaFetcher},
        services::MetadataStore,
    },
    domain::{
        ApiSpecSource, AppManifest, AppName, ClusterCoordinates, DomainError, EnvironmentSpec,
        ScaffoldLayout, SchemaDocument,
    },
    error::KsResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    fetcher: Box<dyn SchemaFetcher>,
    generator: Box<dyn LibraryGenerator>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        fetcher: Box<dyn SchemaFetcher>,
        generator: Box<dyn LibraryGenerator>,
    ) -> Self {
        Self {
            filesystem,
            fetcher,
            generator,
        }
    }

    /// Materialize a new application at `root`.
    #[instrument(
        skip_all,
        fields(
            app = %name,
            root = %root.as_ref().display(),
            api_spec = %spec,
        )
    )]
    pub fn generate(
        &self,
        name: &AppName,
        root: impl AsRef<Path>,
        spec: &ApiSpecSource,
        coordinates: &ClusterCoordinates,
    ) -> KsResult<ScaffoldLayout> {
        let layout = ScaffoldLayout::new(root.as_ref());

        // 1. Precondition
        if self.filesystem.exists(layout.root()) {
            return Err(ApplicationError::AppAlreadyExists {
                path: layout.root().to_path_buf(),
            }
            .into());
        }

        // 2. Directory tree. The root is claimed non-recursively so a
        // concurrent run that got past step 1 fails here.
        self.filesystem.create_dir(layout.root())?;
        for dir in layout.base_directories() {
            self.filesystem.create_dir_all(&dir)?;
        }

        // 3. Manifest
        let store = MetadataStore::new(self.filesystem.as_ref());
        let manifest = AppManifest::new(name.clone(), Utc::now());
        store.write_manifest(&layout.manifest_path(), &manifest)?;

        // 4. Default environment
        self.filesystem.create_dir_all(&layout.environment_dir())?;
        let env_spec = EnvironmentSpec::new(coordinates, spec);
        store.write_environment_spec(&layout.environment_spec_path(), &env_spec)?;
        debug!(
            server = coordinates.server(),
            namespace = coordinates.namespace(),
            "Default environment created"
        );

        // 5. Schema document
        let schema = self.fetch_schema(spec, coordinates)?;
        debug!(
            kubernetes_version = schema.kubernetes_version().unwrap_or("unknown"),
            "API spec resolved"
        );

        // 6. Generated library
        self.write_library(&layout, &schema)?;

        debug!("Application initialized");
        Ok(layout)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn fetch_schema(
        &self,
        spec: &ApiSpecSource,
        coordinates: &ClusterCoordinates,
    ) -> KsResult<SchemaDocument> {
        let raw = self.fetcher.fetch(spec, coordinates)?;

        SchemaDocument::parse(raw).map_err(|e| {
            let reason = match e {
                DomainError::MalformedSchema { reason } => reason,
                other => other.to_string(),
            };
            ApplicationError::SchemaParse {
                source_desc: describe_source(spec, coordinates),
                reason,
            }
            .into()
        })
    }

    fn write_library(&self, layout: &ScaffoldLayout, schema: &SchemaDocument) -> KsResult<()> {
        let metadata_dir = layout.environment_metadata_dir();
        self.filesystem.create_dir_all(&metadata_dir)?;

        let files = self.generator.generate(schema)?;
        for file in &files {
            let path = metadata_dir.join(file.path());
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, file.content())?;
        }

        debug!(files = files.len(), "Schema library generated");
        Ok(())
    }
}

/// Human-readable origin of a schema document, for error messages.
pub fn describe_source(spec: &ApiSpecSource, coordinates: &ClusterCoordinates) -> String {
    match spec {
        ApiSpecSource::Live if coordinates.is_configured() => coordinates.server().to_string(),
        ApiSpecSource::Live => "live cluster (unconfigured)".to_string(),
        other => other.to_string(),
    }
}
