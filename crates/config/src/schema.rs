//! Deployment configuration schema, defaults, and validation.
//!
//! Only `base_path` and the `discovery` table are interpreted here. Every other
//! top-level key is kept verbatim in `extra` so callers can carry their own
//! settings through option normalization untouched.

use appdeploy_domain::BasePath;
use appdeploy_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Base path used when no source provides one.
pub const DEFAULT_BASE_PATH: &str = ".";

/// Top-level deployment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Directory whose subdirectories are the deployable apps.
    pub base_path: PathBuf,
    /// App discovery settings.
    pub discovery: DiscoveryConfig,
    /// Caller-owned settings, passed through unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            discovery: DiscoveryConfig::default(),
            extra: BTreeMap::new(),
        }
    }
}

/// Settings for filesystem app discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DiscoveryConfig {
    /// Include dot-prefixed directories.
    pub include_hidden: bool,
    /// Only directories containing this file count as apps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_file: Option<Box<str>>,
}

/// Validation failures for [`DeployConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// `base_path` is empty after trimming.
    EmptyBasePath,
    /// `discovery.marker_file` is empty or not a plain file name.
    InvalidMarkerFile {
        /// Offending value.
        value: String,
    },
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBasePath => formatter.write_str("base_path must be non-empty"),
            Self::InvalidMarkerFile { value } => write!(
                formatter,
                "discovery.marker_file must be a plain file name, got `{value}`"
            ),
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        match error {
            ConfigSchemaError::EmptyBasePath => Self::expected(
                ErrorCode::new("config", "invalid_base_path"),
                error.to_string(),
            ),
            ConfigSchemaError::InvalidMarkerFile { ref value } => Self::expected(
                ErrorCode::new("config", "invalid_marker_file"),
                error.to_string(),
            )
            .with_metadata("value", value.clone()),
        }
    }
}

impl DeployConfig {
    /// Validate and normalize: trims `base_path` and `discovery.marker_file`.
    pub fn validate(mut self) -> Result<Self, ConfigSchemaError> {
        if let Some(raw) = self.base_path.to_str() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ConfigSchemaError::EmptyBasePath);
            }
            if trimmed.len() != raw.len() {
                self.base_path = PathBuf::from(trimmed);
            }
        } else if self.base_path.as_os_str().is_empty() {
            return Err(ConfigSchemaError::EmptyBasePath);
        }

        if let Some(marker) = self.discovery.marker_file.take() {
            let trimmed = marker.trim();
            if trimmed.is_empty()
                || matches!(trimmed, "." | "..")
                || trimmed.contains(['/', '\\'])
            {
                return Err(ConfigSchemaError::InvalidMarkerFile {
                    value: marker.into_string(),
                });
            }
            self.discovery.marker_file = Some(trimmed.into());
        }

        Ok(self)
    }

    /// Parse JSON text without validating it.
    pub fn from_json_str(input: &str) -> Result<Self, ErrorEnvelope> {
        serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
        })
    }

    /// Parse TOML text without validating it.
    pub fn from_toml_str(input: &str) -> Result<Self, ErrorEnvelope> {
        toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
        })
    }
}

impl BasePath for DeployConfig {
    fn base_path(&self) -> &Path {
        &self.base_path
    }
}
