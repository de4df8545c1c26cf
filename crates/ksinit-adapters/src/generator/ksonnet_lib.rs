//! Jsonnet library generator.
//!
//! Emits three files for an environment's `.metadata/` directory:
//!
//! - `swagger.json`: the schema document, byte for byte,
//! - `k8s.libsonnet`: one constructor per API kind, grouped by API group and
//!   version (`core.v1.pod.new()`),
//! - `k.libsonnet`: the user-facing entry point, which imports `k8s.libsonnet`.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use ksinit_core::{
    application::{ApplicationError, ports::LibraryGenerator},
    domain::{GeneratedFile, SchemaDocument},
    error::KsResult,
};

pub const SWAGGER_FILE: &str = "swagger.json";
pub const K8S_LIB_FILE: &str = "k8s.libsonnet";
pub const K_LIB_FILE: &str = "k.libsonnet";

/// Group key used for the unnamed ("") core API group.
const CORE_GROUP: &str = "core";
const GVK_EXTENSION: &str = "x-kubernetes-group-version-kind";

#[derive(Debug, Clone, Deserialize)]
struct GroupVersionKind {
    #[serde(default)]
    group: String,
    version: String,
    kind: String,
}

impl GroupVersionKind {
    fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// `apps` for `apps`, `rbac` for `rbac.authorization.k8s.io`.
    fn group_key(&self) -> String {
        match self.group.split('.').next() {
            Some(head) if !head.is_empty() => identifier(head),
            _ => CORE_GROUP.to_string(),
        }
    }
}

#[derive(Debug)]
struct KindEntry {
    gvk: GroupVersionKind,
    has_metadata: bool,
}

type GroupTree = BTreeMap<String, BTreeMap<String, BTreeMap<String, KindEntry>>>;

/// Generates the ksonnet-style Jsonnet library for a schema.
#[derive(Debug, Default, Clone, Copy)]
pub struct KsonnetLibGenerator;

impl KsonnetLibGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl LibraryGenerator for KsonnetLibGenerator {
    #[instrument(skip_all)]
    fn generate(&self, schema: &SchemaDocument) -> KsResult<Vec<GeneratedFile>> {
        let tree = collect_kinds(schema);
        debug!(groups = tree.len(), "Collected API kinds");

        let version = schema.kubernetes_version().unwrap_or("unknown");
        let k8s = render_k8s(&tree, version).map_err(|e| generator_failed(e.to_string()))?;

        [
            (SWAGGER_FILE, schema.raw().to_string()),
            (K8S_LIB_FILE, k8s),
            (K_LIB_FILE, render_k()),
        ]
        .into_iter()
        .map(|(path, content)| {
            GeneratedFile::new(path, content).map_err(|e| generator_failed(e.to_string()))
        })
        .collect()
    }
}

fn generator_failed(reason: String) -> ksinit_core::error::KsError {
    ApplicationError::GeneratorFailed { reason }.into()
}

/// Index definitions carrying a group/version/kind by group, then version,
/// then kind. The first definition of a kind wins.
fn collect_kinds(schema: &SchemaDocument) -> GroupTree {
    let mut tree = GroupTree::new();

    for (name, definition) in schema.definitions() {
        let Some(gvk) = definition
            .get(GVK_EXTENSION)
            .and_then(Value::as_array)
            .and_then(|list| list.first())
            .and_then(|first| GroupVersionKind::deserialize(first).ok())
        else {
            continue;
        };

        let has_metadata = definition
            .get("properties")
            .and_then(|props| props.get("metadata"))
            .is_some();

        let kind_key = identifier(&gvk.kind);
        let versions = tree.entry(gvk.group_key()).or_default();
        let kinds = versions.entry(identifier(&gvk.version)).or_default();
        if kinds.contains_key(&kind_key) {
            debug!(definition = %name, "Skipping duplicate kind");
            continue;
        }
        kinds.insert(kind_key, KindEntry { gvk, has_metadata });
    }

    tree
}

fn render_k8s(tree: &GroupTree, version: &str) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "// Generated from the Kubernetes API specification {version}.")?;
    writeln!(out, "// Do not edit; regenerate with `ks init`.")?;
    writeln!(out, "{{")?;
    writeln!(out, "  local hidden = {{")?;
    writeln!(out, "    metadata:: {{")?;
    writeln!(out, "      withName(name):: self + {{ metadata+: {{ name: name }} }},")?;
    writeln!(out, "      withNamespace(namespace):: self + {{ metadata+: {{ namespace: namespace }} }},")?;
    writeln!(out, "      withLabels(labels):: self + {{ metadata+: {{ labels+: labels }} }},")?;
    writeln!(out, "      withAnnotations(annotations):: self + {{ metadata+: {{ annotations+: annotations }} }},")?;
    writeln!(out, "    }},")?;
    writeln!(out, "  }},")?;

    for (group, versions) in tree {
        writeln!(out, "  {group}:: {{")?;
        for (api_version, kinds) in versions {
            writeln!(out, "    {api_version}:: {{")?;
            for (key, entry) in kinds {
                writeln!(out, "      {key}:: {{")?;
                writeln!(out, "        local kind = {{ apiVersion: \"{}\", kind: \"{}\" }},", entry.gvk.api_version(), entry.gvk.kind)?;
                writeln!(out, "        new():: kind,")?;
                if entry.has_metadata {
                    writeln!(out, "        metadata:: hidden.metadata,")?;
                }
                writeln!(out, "      }},")?;
            }
            writeln!(out, "    }},")?;
        }
        writeln!(out, "  }},")?;
    }

    writeln!(out, "}}")?;
    Ok(out)
}

fn render_k() -> String {
    format!("local k8s = import \"{K8S_LIB_FILE}\";\n\nk8s + {{\n}}\n")
}

/// Lower camel case Jsonnet field name: `Pod` -> `pod`,
/// `CustomResourceDefinition` -> `customResourceDefinition`, `v1beta1` stays.
fn identifier(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => "_".to_string(),
    }
}
