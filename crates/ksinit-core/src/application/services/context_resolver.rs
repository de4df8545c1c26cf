//! Context Resolver - turns an optional context name into cluster coordinates.

use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ClusterConfigSource},
    domain::ClusterCoordinates,
    error::{KsError, KsResult},
};

/// Resolves `(server, namespace)` from the cluster configuration.
///
/// Initialization must work on a machine that has never talked to a
/// cluster, so a missing kubeconfig (or one without a current context)
/// yields [`ClusterCoordinates::unconfigured`] instead of an error. An
/// explicitly named context is always required to exist.
pub struct ContextResolver {
    source: Box<dyn ClusterConfigSource>,
}

impl ContextResolver {
    pub fn new(source: Box<dyn ClusterConfigSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self))]
    pub fn resolve(&self, explicit: Option<&str>) -> KsResult<ClusterCoordinates> {
        let config = match self.source.load() {
            Ok(config) => config,
            Err(KsError::Application(ApplicationError::ConfigNotFound { searched })) => {
                if let Some(name) = explicit {
                    return Err(ApplicationError::ContextNotFound { name: name.into() }.into());
                }
                warn!(searched = %searched, "No kubeconfig found; environment will be unconfigured");
                return Ok(ClusterCoordinates::unconfigured());
            }
            Err(e) => return Err(e),
        };

        let name = match explicit.or(config.current_context()) {
            Some(name) => name,
            None => {
                warn!("Kubeconfig has no current context; environment will be unconfigured");
                return Ok(ClusterCoordinates::unconfigured());
            }
        };

        let coordinates = config
            .context(name)
            .cloned()
            .ok_or_else(|| ApplicationError::ContextNotFound { name: name.into() })?;

        debug!(
            context = name,
            server = coordinates.server(),
            namespace = coordinates.namespace(),
            "Context resolved"
        );
        Ok(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ports::MockClusterConfigSource;
    use crate::domain::ClusterConfig;

    fn resolver_with(result: KsResult<ClusterConfig>) -> ContextResolver {
        let mut source = MockClusterConfigSource::new();
        source.expect_load().return_once(move || result);
        ContextResolver::new(Box::new(source))
    }

    fn sample_config() -> ClusterConfig {
        ClusterConfig::new()
            .with_context(
                "prod",
                ClusterCoordinates::new("https://10.0.0.1:6443", Some("kube-system".into())),
            )
            .with_context("dev", ClusterCoordinates::new("https://dev:6443", None))
            .with_current_context("prod")
    }

    #[test]
    fn resolves_current_context_by_default() {
        let coords = resolver_with(Ok(sample_config())).resolve(None).unwrap();
        assert_eq!(coords.server(), "https://10.0.0.1:6443");
        assert_eq!(coords.namespace(), "kube-system");
    }

    #[test]
    fn resolves_explicit_context() {
        let coords = resolver_with(Ok(sample_config())).resolve(Some("dev")).unwrap();
        assert_eq!(coords.server(), "https://dev:6443");
        assert_eq!(coords.namespace(), "default");
    }

    #[test]
    fn unknown_explicit_context_fails() {
        let err = resolver_with(Ok(sample_config()))
            .resolve(Some("staging"))
            .unwrap_err();
        assert_eq!(
            err,
            ApplicationError::ContextNotFound {
                name: "staging".into()
            }
            .into()
        );
    }

    #[test]
    fn dangling_current_context_fails() {
        let config = ClusterConfig::new().with_current_context("gone");
        let err = resolver_with(Ok(config)).resolve(None).unwrap_err();
        assert!(matches!(
            err,
            KsError::Application(ApplicationError::ContextNotFound { .. })
        ));
    }

    #[test]
    fn missing_kubeconfig_degrades_to_unconfigured() {
        let missing = Err(ApplicationError::ConfigNotFound {
            searched: "~/.kube/config".into(),
        }
        .into());
        let coords = resolver_with(missing).resolve(None).unwrap();
        assert_eq!(coords, ClusterCoordinates::unconfigured());
    }

    #[test]
    fn no_current_context_degrades_to_unconfigured() {
        let config = ClusterConfig::new().with_context("dev", ClusterCoordinates::new("https://dev", None));
        let coords = resolver_with(Ok(config)).resolve(None).unwrap();
        assert!(!coords.is_configured());
    }

    #[test]
    fn missing_kubeconfig_with_explicit_context_fails() {
        let missing = Err(ApplicationError::ConfigNotFound {
            searched: "~/.kube/config".into(),
        }
        .into());
        let err = resolver_with(missing).resolve(Some("dev")).unwrap_err();
        assert!(matches!(
            err,
            KsError::Application(ApplicationError::ContextNotFound { .. })
        ));
    }

    #[test]
    fn parse_errors_propagate() {
        let broken = Err(ApplicationError::ConfigParse {
            path: PathBuf::from("/home/me/.kube/config"),
            reason: "bad indentation".into(),
        }
        .into());
        let err = resolver_with(broken).resolve(None).unwrap_err();
        assert!(matches!(
            err,
            KsError::Application(ApplicationError::ConfigParse { .. })
        ));
    }
}
