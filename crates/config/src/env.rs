//! Environment variable parsing and env-to-config merging.
//!
//! Parsing is strict: a variable that is present must be non-empty, and
//! boolean variables must use one of the accepted spellings.

use crate::schema::DeployConfig;
use appdeploy_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Env var: base path override.
pub const ENV_BASE_PATH: &str = "APPDEPLOY_BASE_PATH";
/// Env var: include dot-prefixed app directories.
pub const ENV_DISCOVERY_INCLUDE_HIDDEN: &str = "APPDEPLOY_DISCOVERY_INCLUDE_HIDDEN";
/// Env var: marker file required inside app directories.
pub const ENV_DISCOVERY_MARKER_FILE: &str = "APPDEPLOY_DISCOVERY_MARKER_FILE";

const KNOWN_VARS: [&str; 3] = [
    ENV_BASE_PATH,
    ENV_DISCOVERY_INCLUDE_HIDDEN,
    ENV_DISCOVERY_MARKER_FILE,
];

/// Typed env-derived overrides for [`DeployConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployEnv {
    /// Override for `base_path`.
    pub base_path: Option<Box<str>>,
    /// Override for `discovery.include_hidden`.
    pub discovery_include_hidden: Option<bool>,
    /// Override for `discovery.marker_file`.
    pub discovery_marker_file: Option<Box<str>>,
}

impl DeployEnv {
    /// Parse overrides from an explicit variable map.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            base_path: parse_optional_trimmed_string(map, ENV_BASE_PATH)?,
            discovery_include_hidden: parse_optional_bool(map, ENV_DISCOVERY_INCLUDE_HIDDEN)?,
            discovery_marker_file: parse_optional_trimmed_string(map, ENV_DISCOVERY_MARKER_FILE)?,
        })
    }

}

/// Snapshot the variables this crate understands from the process environment.
#[must_use]
pub fn capture_std_env() -> BTreeMap<String, String> {
    KNOWN_VARS
        .iter()
        .filter_map(|name| {
            std::env::var(name)
                .ok()
                .map(|value| ((*name).to_owned(), value))
        })
        .collect()
}

/// Merge env overrides into `base` and validate the result.
pub fn apply_env_overrides(
    base: DeployConfig,
    env: &DeployEnv,
) -> Result<DeployConfig, ErrorEnvelope> {
    let mut config = base;
    if let Some(base_path) = env.base_path.as_deref() {
        config.base_path = PathBuf::from(base_path);
    }
    if let Some(include_hidden) = env.discovery_include_hidden {
        config.discovery.include_hidden = include_hidden;
    }
    if let Some(marker_file) = env.discovery_marker_file.as_deref() {
        config.discovery.marker_file = Some(marker_file.into());
    }

    config.validate().map_err(Into::into)
}

/// Env parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Boolean env var had an invalid value.
    InvalidBool {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidBool { var, .. } => write!(formatter, "{var} must be a boolean"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let message = error.to_string();
        match error {
            EnvParseError::EmptyValue { var } => {
                Self::expected(ErrorCode::new("config", "empty_env_var"), message)
                    .with_metadata("env_var", var)
            },
            EnvParseError::InvalidBool { var, value } => {
                Self::expected(ErrorCode::new("config", "invalid_env_bool"), message)
                    .with_metadata("env_var", var)
                    .with_metadata("value", value)
            },
        }
    }
}

fn parse_optional_trimmed_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Box<str>>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    Ok(Some(trimmed.into()))
}

fn parse_optional_bool(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<bool>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(EnvParseError::InvalidBool {
            var,
            value: raw.clone(),
        }),
    }
}
