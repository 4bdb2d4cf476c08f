//! Apps command handler: list every discoverable app.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use appdeploy_domain::AppName;
use appdeploy_infra::{ConfigSources, run_list_apps_local};

/// Run the apps command.
pub fn run_apps(mode: OutputMode, sources: &ConfigSources) -> Result<CliOutput, CliError> {
    let apps = run_list_apps_local(sources)?;

    let stdout = if mode.is_json() {
        let mut output = serde_json::to_string_pretty(&serde_json::json!({ "apps": apps }))?;
        output.push('\n');
        output
    } else {
        apps.iter()
            .map(AppName::as_str)
            .fold(String::new(), |mut output, name| {
                output.push_str(name);
                output.push('\n');
                output
            })
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}
