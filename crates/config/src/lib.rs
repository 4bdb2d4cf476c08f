//! # appdeploy-config
//!
//! Deployment configuration schema, env parsing, and file loading for the CLI.
//! This crate depends on `domain` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (file + env + CLI override).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    DeployEnv, ENV_BASE_PATH, ENV_DISCOVERY_INCLUDE_HIDDEN, ENV_DISCOVERY_MARKER_FILE,
    EnvParseError, apply_env_overrides, capture_std_env,
};
pub use load::{load_deploy_config_from_path, to_pretty_json, to_pretty_toml};
pub use schema::{ConfigSchemaError, DEFAULT_BASE_PATH, DeployConfig, DiscoveryConfig};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
