//! Config loading helpers for CLI surfaces.

use crate::{InfraResult, parse_env};
use appdeploy_config::{
    DeployConfig, load_deploy_config_from_path, to_pretty_json, to_pretty_toml,
};
use std::collections::BTreeMap;
use std::path::Path;

/// Output format for the effective config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    /// Pretty JSON.
    #[default]
    Json,
    /// Pretty TOML.
    Toml,
}

/// Load and validate the effective config from every source.
pub fn load_effective_config(
    env: &BTreeMap<String, String>,
    config_path: Option<&Path>,
    base_path_override: Option<&Path>,
) -> InfraResult<DeployConfig> {
    let env = parse_env(env)?;
    load_deploy_config_from_path(config_path, base_path_override, &env)
}

/// Load the effective config and render it in `format`.
pub fn render_effective_config(
    env: &BTreeMap<String, String>,
    config_path: Option<&Path>,
    base_path_override: Option<&Path>,
    format: ConfigFormat,
) -> InfraResult<String> {
    let config = load_effective_config(env, config_path, base_path_override)?;
    match format {
        ConfigFormat::Json => to_pretty_json(&config),
        ConfigFormat::Toml => to_pretty_toml(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appdeploy_config::ENV_BASE_PATH;

    #[test]
    fn env_base_path_shows_up_in_json() -> InfraResult<()> {
        let env = BTreeMap::from([(ENV_BASE_PATH.to_owned(), "/srv/apps".to_owned())]);
        let output = render_effective_config(&env, None, None, ConfigFormat::Json)?;
        assert!(output.contains("\"base_path\": \"/srv/apps\""));
        Ok(())
    }

    #[test]
    fn toml_rendering_uses_defaults() -> InfraResult<()> {
        let output =
            render_effective_config(&BTreeMap::new(), None, None, ConfigFormat::Toml)?;
        assert!(output.starts_with("base_path = \".\""));
        assert!(output.contains("[discovery]"));
        Ok(())
    }
}
