//! Local CLI orchestration: load config, wire adapters, run the use case.

use crate::{InfraError, InfraResult, load_effective_config};
use appdeploy_adapters::LocalAppLister;
use appdeploy_app::{
    NormalizeOptionsDeps, NormalizeOptionsInput, NormalizedOptions, normalize_options,
};
use appdeploy_config::DeployConfig;
use appdeploy_domain::{AppList, Args};
use appdeploy_ports::{AppListerPort, ConsolePort};
use std::collections::BTreeMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the effective config comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// Env variable snapshot (see `appdeploy_config::capture_std_env`).
    pub env: BTreeMap<String, String>,
    /// Optional config file.
    pub config_path: Option<PathBuf>,
    /// `--base-path` override.
    pub base_path_override: Option<PathBuf>,
}

/// A resolve request as assembled by the CLI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveRequest {
    /// Option map.
    pub args: Args,
    /// Explicit app names; `None` when none were given.
    pub apps: Option<AppList>,
    /// Config sources.
    pub sources: ConfigSources,
}

/// Normalized options with the effective config.
pub type ResolvedOptions = NormalizedOptions<Arc<DeployConfig>>;

/// Normalize options against the local filesystem.
pub fn run_resolve_local(
    request: ResolveRequest,
    console: Arc<dyn ConsolePort>,
) -> InfraResult<ResolvedOptions> {
    let config = Arc::new(load_sources(&request.sources)?);
    let deps = NormalizeOptionsDeps {
        app_lister: Arc::new(LocalAppLister::from_discovery(&config.discovery)),
        console,
    };
    let mut input = NormalizeOptionsInput::new(config).with_args(request.args);
    input.apps = request.apps;

    run_async(async move { normalize_options(&deps, input).await })
}

/// List every app under the effective base path.
pub fn run_list_apps_local(sources: &ConfigSources) -> InfraResult<AppList> {
    let config = load_sources(sources)?;
    let lister = LocalAppLister::from_discovery(&config.discovery);
    run_async(async move { lister.list_all_apps(config.base_path).await })
}

fn load_sources(sources: &ConfigSources) -> InfraResult<DeployConfig> {
    load_effective_config(
        &sources.env,
        sources.config_path.as_deref(),
        sources.base_path_override.as_deref(),
    )
}

fn run_async<F, T>(future: F) -> InfraResult<T>
where
    F: Future<Output = InfraResult<T>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(InfraError::from)?;
    runtime.block_on(future)
}
