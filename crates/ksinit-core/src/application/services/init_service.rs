//! Init Service - the `init` use case end to end.
//!
//! Validates raw user input, resolves cluster coordinates, then hands the
//! resolved values to [`ScaffoldService`].

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::services::{ContextResolver, ScaffoldService},
    domain::{ApiSpecSource, AppName, DEFAULT_API_SPEC, ScaffoldLayout},
    error::KsResult,
};

/// Everything the `init` use case needs, built by the caller.
///
/// The core never reads flags or environment variables itself; the CLI
/// fills this in and passes it by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Raw application name.
    pub app_name: String,
    /// Directory the application is created in (usually the cwd). Relative
    /// `file:` selectors are resolved against it.
    pub parent_dir: PathBuf,
    /// Raw `--api-spec` selector.
    pub api_spec: String,
    /// Context to use instead of the current one.
    pub context: Option<String>,
    /// Namespace overriding the one resolved from the context.
    pub namespace: Option<String>,
}

impl InitOptions {
    pub fn new(app_name: impl Into<String>, parent_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_name: app_name.into(),
            parent_dir: parent_dir.into(),
            api_spec: DEFAULT_API_SPEC.into(),
            context: None,
            namespace: None,
        }
    }
}

/// Runs the full initialization protocol.
pub struct InitService {
    resolver: ContextResolver,
    scaffold: ScaffoldService,
}

impl InitService {
    pub fn new(resolver: ContextResolver, scaffold: ScaffoldService) -> Self {
        Self { resolver, scaffold }
    }

    #[instrument(skip_all, fields(app = %options.app_name))]
    pub fn run(&self, options: InitOptions) -> KsResult<ScaffoldLayout> {
        let name = AppName::new(options.app_name)?;
        let spec = options
            .api_spec
            .parse::<ApiSpecSource>()?
            .resolved_against(&options.parent_dir);
        let root = options.parent_dir.join(name.as_str());

        info!("Creating a new app '{}' at path '{}'", name, root.display());

        let context = options.context.as_deref().filter(|c| !c.is_empty());
        let mut coordinates = self.resolver.resolve(context)?;
        if let Some(namespace) = options.namespace.filter(|ns| !ns.is_empty()) {
            coordinates = coordinates.with_namespace(namespace);
        }

        self.scaffold.generate(&name, &root, &spec, &coordinates)
    }
}
