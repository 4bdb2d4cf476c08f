//! Config command handlers.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use appdeploy_infra::{ConfigFormat, ConfigSources, render_effective_config};
use clap::ValueEnum;

/// Serialization format for `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConfigFormatArg {
    /// Pretty JSON.
    #[default]
    Json,
    /// Pretty TOML.
    Toml,
}

impl From<ConfigFormatArg> for ConfigFormat {
    fn from(value: ConfigFormatArg) -> Self {
        match value {
            ConfigFormatArg::Json => Self::Json,
            ConfigFormatArg::Toml => Self::Toml,
        }
    }
}

/// Print the effective config.
pub fn run_config_show(
    sources: &ConfigSources,
    format: ConfigFormatArg,
) -> Result<CliOutput, CliError> {
    let stdout = render_effective_config(
        &sources.env,
        sources.config_path.as_deref(),
        sources.base_path_override.as_deref(),
        format.into(),
    )?;

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}
