//! Environment validation helpers for CLI surfaces.

use appdeploy_config::DeployEnv;
use appdeploy_shared::ErrorEnvelope;
use std::collections::BTreeMap;

/// Infra-level error type (shared error envelope).
pub type InfraError = ErrorEnvelope;

/// Infra-level result type.
pub type InfraResult<T> = Result<T, InfraError>;

/// Parse env overrides from a variable map.
pub fn parse_env(env: &BTreeMap<String, String>) -> InfraResult<DeployEnv> {
    DeployEnv::from_map(env).map_err(ErrorEnvelope::from)
}
