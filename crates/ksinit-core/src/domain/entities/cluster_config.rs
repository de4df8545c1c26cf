use std::collections::BTreeMap;

use crate::domain::value_objects::ClusterCoordinates;

/// Named contexts loaded from a cluster-configuration file.
///
/// This is the format-independent view the core works with; parsing the
/// on-disk kubeconfig is an adapter concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterConfig {
    contexts: BTreeMap<String, ClusterCoordinates>,
    current_context: Option<String>,
}

impl ClusterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, name: impl Into<String>, coordinates: ClusterCoordinates) -> Self {
        self.insert_context(name, coordinates);
        self
    }

    pub fn with_current_context(mut self, name: impl Into<String>) -> Self {
        self.set_current_context(name);
        self
    }

    /// Register a context. The first definition of a name wins, matching how
    /// kubeconfig file lists are merged.
    pub fn insert_context(&mut self, name: impl Into<String>, coordinates: ClusterCoordinates) {
        self.contexts.entry(name.into()).or_insert(coordinates);
    }

    /// Set the current context unless one is already set. Empty names are
    /// ignored.
    pub fn set_current_context(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.current_context.is_none() && !name.is_empty() {
            self.current_context = Some(name);
        }
    }

    pub fn context(&self, name: &str) -> Option<&ClusterCoordinates> {
        self.contexts.get(name)
    }

    pub fn current_context(&self) -> Option<&str> {
        self.current_context.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
