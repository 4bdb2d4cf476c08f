//! Resolve command handler: normalize deploy options and print them.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use appdeploy_config::DeployConfig;
use appdeploy_domain::{ALL_APPS_KEY, AppList, Args, ENVIRONMENT_KEY, parse_app_list};
use appdeploy_infra::{ConfigSources, ResolveRequest, ResolvedOptions, run_resolve_local};
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;

/// Parsed `resolve` flags.
pub struct ResolveCommandInput<'a> {
    pub apps: &'a [String],
    pub all_apps: bool,
    pub environment: Option<&'a str>,
    pub assignments: &'a [String],
    pub sources: ConfigSources,
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    args: &'a Args,
    apps: &'a AppList,
    config: &'a DeployConfig,
}

/// Run the resolve command.
pub fn run_resolve(
    mode: OutputMode,
    input: ResolveCommandInput<'_>,
) -> Result<CliOutput, CliError> {
    let args = build_args(&input)?;
    let apps = if input.apps.is_empty() {
        None
    } else {
        let apps = parse_app_list(input.apps)
            .map_err(|error| CliError::InvalidInput(error.to_string()))?;
        Some(apps)
    };

    let request = ResolveRequest {
        args,
        apps,
        sources: input.sources,
    };
    let resolved = run_resolve_local(request, Arc::new(mode.console()))?;

    let stdout = if mode.is_json() {
        format_resolve_json(&resolved)?
    } else {
        format_resolve_text(&resolved)
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

/// `--arg` pairs first, then the dedicated flags so they win.
fn build_args(input: &ResolveCommandInput<'_>) -> Result<Args, CliError> {
    let mut args = Args::new();
    for assignment in input.assignments {
        let (key, value) = Args::parse_assignment(assignment)
            .map_err(|error| CliError::InvalidInput(error.to_string()))?;
        args.insert(key, value);
    }
    if let Some(environment) = input.environment {
        args.insert(ENVIRONMENT_KEY, environment);
    }
    if input.all_apps {
        args.insert(ALL_APPS_KEY, true);
    }
    Ok(args)
}

fn format_resolve_text(resolved: &ResolvedOptions) -> String {
    let environment = resolved
        .args
        .environment()
        .map(ToString::to_string)
        .unwrap_or_default();
    let apps = if resolved.apps.is_empty() {
        "(none)".to_owned()
    } else {
        resolved
            .apps
            .iter()
            .map(|app| app.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut output = format!(
        "environment: {environment}\napps: {apps}\nbase_path: {}\nargs:\n",
        resolved.config.base_path.display()
    );
    for (key, value) in resolved.args.iter() {
        let _ = writeln!(output, "  {key} = {value}");
    }
    output
}

fn format_resolve_json(resolved: &ResolvedOptions) -> Result<String, CliError> {
    let payload = ResolveOutput {
        args: &resolved.args,
        apps: &resolved.apps,
        config: &resolved.config,
    };
    let mut output = serde_json::to_string_pretty(&payload)?;
    output.push('\n');
    Ok(output)
}
