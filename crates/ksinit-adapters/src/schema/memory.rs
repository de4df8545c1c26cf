//! In-memory schema fetcher for tests and offline use.

use std::collections::HashMap;

use ksinit_core::{
    application::{ApplicationError, describe_source, ports::SchemaFetcher},
    domain::{ApiSpecSource, ClusterCoordinates},
    error::KsResult,
};

/// Serves documents registered by selector.
///
/// Selectors are matched on their display form (`version:v1.7.0`,
/// `file:/tmp/swagger.json`, or the empty string for the live selector).
#[derive(Debug, Default, Clone)]
pub struct StaticSchemaFetcher {
    documents: HashMap<String, String>,
}

impl StaticSchemaFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `document` as the answer for `spec`.
    pub fn with_document(mut self, spec: &ApiSpecSource, document: impl Into<String>) -> Self {
        self.documents.insert(spec.to_string(), document.into());
        self
    }
}

impl SchemaFetcher for StaticSchemaFetcher {
    fn fetch(&self, spec: &ApiSpecSource, coordinates: &ClusterCoordinates) -> KsResult<String> {
        self.documents.get(&spec.to_string()).cloned().ok_or_else(|| {
            ApplicationError::SchemaFetch {
                source_desc: describe_source(spec, coordinates),
                reason: "no document registered".into(),
            }
            .into()
        })
    }
}
