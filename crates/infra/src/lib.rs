//! # appdeploy-infra
//!
//! Infrastructure wiring and runtime composition.
//! This crate depends on `app`, `adapters`, `config`, and `shared`.

/// Local CLI orchestration helpers.
pub mod cli_local;
/// Config loading helpers used by CLI surfaces.
pub mod config_check;
/// Environment validation helpers used by CLI surfaces.
pub mod env_check;

pub use cli_local::{
    ConfigSources, ResolveRequest, ResolvedOptions, run_list_apps_local, run_resolve_local,
};
pub use config_check::{ConfigFormat, load_effective_config, render_effective_config};
pub use env_check::{InfraError, InfraResult, parse_env};

/// Returns the infra crate version.
#[must_use]
pub const fn infra_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
