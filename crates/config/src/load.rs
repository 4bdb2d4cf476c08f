//! Config loading helpers (file + env + CLI override).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::{DeployConfig, DeployEnv, apply_env_overrides};
use appdeploy_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

/// Load the deploy config from an optional file path.
///
/// Precedence (highest wins):
/// - `base_path_override` (the CLI `--base-path` flag)
/// - env overrides (`DeployEnv`)
/// - config file content
/// - defaults (`DeployConfig::default()`)
pub fn load_deploy_config_from_path(
    config_path: Option<&Path>,
    base_path_override: Option<&Path>,
    env: &DeployEnv,
) -> Result<DeployConfig, ErrorEnvelope> {
    let config = match config_path {
        None => DeployConfig::default(),
        Some(path) => {
            let config_text = read_config_file(path)?;
            let format = detect_config_format(path)?;
            let parsed = match format {
                ConfigFormat::Json => DeployConfig::from_json_str(&config_text),
                ConfigFormat::Toml => DeployConfig::from_toml_str(&config_text),
            };
            parsed
                .map_err(|error| error.with_metadata("path", path.to_string_lossy().to_string()))?
        },
    };

    // env is applied before the CLI override and also validates the config.
    let mut config = apply_env_overrides(config, env)?;
    if let Some(base_path) = base_path_override {
        config.base_path = base_path.to_path_buf();
        config = config.validate()?;
    }

    tracing::debug!(
        target: "appdeploy.config",
        base_path = %config.base_path.display(),
        include_hidden = config.discovery.include_hidden,
        from_file = config_path.is_some(),
        "config loaded"
    );
    Ok(config)
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &DeployConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_json"),
            format!("failed to serialize config as JSON: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
///
/// Fails with `config:serialize_toml` when `extra` holds values TOML cannot
/// express.
pub fn to_pretty_toml(config: &DeployConfig) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config as TOML: {error}"),
        )
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_string())),
    }
}
