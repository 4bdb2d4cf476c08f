//! End-to-end: `config show` across sources and formats.

use appdeploy_testkit::fixtures::fixture_path;
use serde_json::Value;
use std::process::{Command, Output};

fn run_cli(args: &[&str], env: &[(&str, &str)]) -> std::io::Result<Output> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_appdeploy"));
    command.args(args);
    for (key, _) in std::env::vars() {
        if key.starts_with("APPDEPLOY_") {
            command.env_remove(key);
        }
    }
    command.envs(env.iter().copied());
    command.output()
}

#[test]
fn show_defaults_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_cli(&["config", "show"], &[])?;
    assert!(output.status.success());
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["base_path"], ".");
    assert_eq!(payload["discovery"]["include_hidden"], false);
    Ok(())
}

#[test]
fn cli_beats_env_beats_file() -> Result<(), Box<dyn std::error::Error>> {
    let config = fixture_path("config/deploy.valid.json");
    let config = config.to_string_lossy();

    let from_file = run_cli(&["config", "show", "--config", &config], &[])?;
    let payload: Value = serde_json::from_slice(&from_file.stdout)?;
    assert_eq!(payload["base_path"], "./services");
    assert_eq!(payload["registry"], "ghcr.io/acme");

    let from_env = run_cli(
        &["config", "show", "--config", &config],
        &[("APPDEPLOY_BASE_PATH", "/from/env")],
    )?;
    let payload: Value = serde_json::from_slice(&from_env.stdout)?;
    assert_eq!(payload["base_path"], "/from/env");

    let from_cli = run_cli(
        &["config", "show", "--config", &config, "--base-path", "/from/cli"],
        &[("APPDEPLOY_BASE_PATH", "/from/env")],
    )?;
    let payload: Value = serde_json::from_slice(&from_cli.stdout)?;
    assert_eq!(payload["base_path"], "/from/cli");
    assert_eq!(payload["discovery"]["marker_file"], "app.toml");
    Ok(())
}

#[test]
fn show_as_toml() -> Result<(), Box<dyn std::error::Error>> {
    let config = fixture_path("config/deploy.valid.toml");
    let output = run_cli(
        &["config", "show", "--format", "toml", "--config", &config.to_string_lossy()],
        &[],
    )?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("base_path = \"/srv/apps\""));
    assert!(stdout.contains("include_hidden = true"));
    Ok(())
}

#[test]
fn missing_config_file_exits_with_io() -> Result<(), Box<dyn std::error::Error>> {
    let config = fixture_path("config/missing.json");
    let output = run_cli(&["config", "show", "--config", &config.to_string_lossy()], &[])?;
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("config:config_file_not_found"));
    Ok(())
}

#[test]
fn unsupported_extension_is_invalid_input() -> Result<(), Box<dyn std::error::Error>> {
    let config = fixture_path("apps/README.md");
    let output = run_cli(&["config", "show", "--config", &config.to_string_lossy()], &[])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("config:unsupported_format"));
    Ok(())
}
