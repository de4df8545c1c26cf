use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// A validated OpenAPI (Swagger 2.0 or OpenAPI 3) document describing the
/// Kubernetes object model.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    raw: String,
    document: Value,
}

impl SchemaDocument {
    /// Parse and sanity-check a schema document.
    ///
    /// The document must be a JSON object carrying a `swagger` or `openapi`
    /// marker and a non-empty set of type definitions.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let document: Value =
            serde_json::from_str(&raw).map_err(|e| DomainError::MalformedSchema {
                reason: format!("not valid JSON: {e}"),
            })?;

        let Some(object) = document.as_object() else {
            return Err(DomainError::MalformedSchema {
                reason: "top-level value is not an object".into(),
            });
        };

        if !object.contains_key("swagger") && !object.contains_key("openapi") {
            return Err(DomainError::MalformedSchema {
                reason: "missing 'swagger' or 'openapi' version marker".into(),
            });
        }

        let has_definitions = definitions_of(object).is_some_and(|defs| !defs.is_empty());
        if !has_definitions {
            return Err(DomainError::MalformedSchema {
                reason: "document defines no types".into(),
            });
        }

        Ok(Self { raw, document })
    }

    /// The document text exactly as it was fetched.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The Kubernetes version the document describes (`info.version`).
    pub fn kubernetes_version(&self) -> Option<&str> {
        self.document
            .get("info")
            .and_then(|info| info.get("version"))
            .and_then(Value::as_str)
    }

    /// Type definitions keyed by their fully qualified name.
    pub fn definitions(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.document
            .as_object()
            .and_then(definitions_of)
            .into_iter()
            .flatten()
    }
}

fn definitions_of(object: &Map<String, Value>) -> Option<&Map<String, Value>> {
    object
        .get("definitions")
        .or_else(|| object.get("components").and_then(|c| c.get("schemas")))
        .and_then(Value::as_object)
}

/// A file emitted by the schema-binding library generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    path: RelativePath,
    content: String,
}

impl GeneratedFile {
    pub fn new(path: impl AsRef<Path>, content: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path.as_ref())?,
            content: content.into(),
        })
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "swagger": "2.0",
        "info": {"title": "Kubernetes", "version": "v1.7.0"},
        "definitions": {"io.k8s.api.core.v1.Pod": {"type": "object"}}
    }"#;

    #[test]
    fn parses_swagger_document() {
        let doc = SchemaDocument::parse(MINIMAL).unwrap();
        assert_eq!(doc.kubernetes_version(), Some("v1.7.0"));
        assert!(doc.definitions().any(|(name, _)| name == "io.k8s.api.core.v1.Pod"));
        assert_eq!(doc.raw(), MINIMAL);
    }

    #[test]
    fn parses_openapi_v3_components() {
        let raw = r#"{"openapi": "3.0.0", "components": {"schemas": {"Pod": {}}}}"#;
        let doc = SchemaDocument::parse(raw).unwrap();
        assert_eq!(doc.definitions().count(), 1);
        assert_eq!(doc.kubernetes_version(), None);
    }

    #[test]
    fn rejects_malformed_documents() {
        for raw in [
            "not json",
            "[1, 2, 3]",
            r#"{"definitions": {"a": {}}}"#,
            r#"{"swagger": "2.0", "definitions": {}}"#,
        ] {
            assert!(
                matches!(
                    SchemaDocument::parse(raw),
                    Err(DomainError::MalformedSchema { .. })
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn generated_file_rejects_escaping_path() {
        assert!(GeneratedFile::new("../k8s.libsonnet", "").is_err());
        assert!(GeneratedFile::new("k8s.libsonnet", "{}").is_ok());
    }
}
