//! `ks init`: create a new application directory.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::{debug, instrument};

use ksinit_adapters::{
    HttpSchemaFetcher, KsonnetLibGenerator, KubeconfigReader, LocalFilesystem,
    kubeconfig::KUBECONFIG_ENV,
};
use ksinit_core::{domain::DEFAULT_ENVIRONMENT, prelude::*};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create the application in the current directory.
#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "Failed to determine the current directory".into(),
        source: e,
    })?;

    let kubeconfig = kubeconfig_source(
        args.kubeconfig,
        std::env::var_os(KUBECONFIG_ENV),
        config.cluster.kubeconfig.clone(),
    );
    debug!(paths = ?kubeconfig.paths(), "Kubeconfig candidates");

    let filesystem = LocalFilesystem::new();
    let service = InitService::new(
        ContextResolver::new(Box::new(kubeconfig)),
        ScaffoldService::new(
            Box::new(filesystem),
            Box::new(HttpSchemaFetcher::with_timeout(config.fetch_timeout())),
            Box::new(KsonnetLibGenerator::new()),
        ),
    );

    let options = InitOptions {
        app_name: args.name,
        parent_dir: cwd,
        api_spec: args.api_spec.unwrap_or(config.defaults.api_spec),
        context: args.context,
        namespace: args.namespace,
    };
    let app_name = options.app_name.clone();

    let spinner = output.spinner(format!("Creating app '{app_name}'"));
    let result = service.run(options);
    spinner.finish_and_clear();
    let layout = result?;

    let environment =
        MetadataStore::new(&filesystem).read_environment_spec(&layout.environment_spec_path())?;

    output.success(&format!(
        "Created app '{app_name}' at {}",
        layout.root().display()
    ))?;
    if environment.server.is_empty() {
        output.warning(&format!(
            "Environment '{DEFAULT_ENVIRONMENT}' is not bound to a cluster; \
             set `server` in environments/{DEFAULT_ENVIRONMENT}/spec.json"
        ))?;
    } else {
        output.print(&format!(
            "  Environment '{DEFAULT_ENVIRONMENT}' targets {} (namespace '{}')",
            environment.server, environment.namespace
        ))?;
    }

    output.print("")?;
    output.header("Next steps:")?;
    output.print(&format!("  cd {app_name}"))?;
    output.print("  Add Jsonnet components under components/")?;

    Ok(())
}

/// Pick the kubeconfig files to read.
///
/// `--kubeconfig` wins, then `$KUBECONFIG`, then the configured path, then
/// `~/.kube/config`.
fn kubeconfig_source(
    flag: Option<PathBuf>,
    env_value: Option<OsString>,
    configured: Option<PathBuf>,
) -> KubeconfigReader {
    if let Some(path) = flag {
        return KubeconfigReader::from_path(path);
    }

    let listed = KubeconfigReader::from_env_value(env_value, None);
    if !listed.paths().is_empty() {
        return listed;
    }

    match configured {
        Some(path) => KubeconfigReader::from_path(path),
        None => KubeconfigReader::from_environment(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        let reader = kubeconfig_source(
            Some(PathBuf::from("/flag")),
            Some(OsString::from("/env")),
            Some(PathBuf::from("/configured")),
        );
        assert_eq!(reader.paths(), &[PathBuf::from("/flag")]);
    }

    #[test]
    fn environment_beats_config_file() {
        let reader = kubeconfig_source(
            None,
            Some(OsString::from("/env")),
            Some(PathBuf::from("/configured")),
        );
        assert_eq!(reader.paths(), &[PathBuf::from("/env")]);
    }

    #[test]
    fn config_file_used_when_environment_empty() {
        let reader = kubeconfig_source(
            None,
            Some(OsString::new()),
            Some(PathBuf::from("/configured")),
        );
        assert_eq!(reader.paths(), &[PathBuf::from("/configured")]);
    }
}
