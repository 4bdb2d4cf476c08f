//! End-to-end: resolve and apps against the sample app tree.

use appdeploy_testkit::fixtures::sample_apps_dir;
use serde_json::Value;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> std::io::Result<Output> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_appdeploy"));
    command.args(args).env("NO_COLOR", "1");
    for (key, _) in std::env::vars() {
        if key.starts_with("APPDEPLOY_") {
            command.env_remove(key);
        }
    }
    command.output()
}

fn parse_stdout(output: &Output) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn resolve_all_apps_json() -> Result<(), Box<dyn std::error::Error>> {
    let base_path = sample_apps_dir();
    let base_path = base_path.to_string_lossy();
    let output = run_cli(&[
        "--output",
        "json",
        "resolve",
        "legacy",
        "--all-apps",
        "--base-path",
        &base_path,
        "--arg",
        "dry-run=true",
    ])?;
    assert!(output.status.success());

    let payload = parse_stdout(&output)?;
    assert_eq!(payload["apps"], serde_json::json!(["api", "web", "worker"]));
    assert_eq!(payload["args"]["environment"], "dev");
    assert_eq!(payload["args"]["all-apps"], true);
    assert_eq!(payload["args"]["dry-run"], true);
    assert_eq!(payload["config"]["base_path"], Value::String(base_path.to_string()));
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn resolve_json_sends_warning_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_cli(&["--output", "json", "resolve", "--environment", ""])?;
    assert!(output.status.success());

    let payload = parse_stdout(&output)?;
    assert_eq!(payload["apps"], serde_json::json!([]));
    assert_eq!(payload["args"]["environment"], "dev");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, "The provided array of app names is empty.\n");
    Ok(())
}

#[test]
fn apps_honors_marker_env() -> Result<(), Box<dyn std::error::Error>> {
    let base_path = sample_apps_dir();
    let output = Command::new(env!("CARGO_BIN_EXE_appdeploy"))
        .args(["apps"])
        .env("APPDEPLOY_BASE_PATH", &base_path)
        .env("APPDEPLOY_DISCOVERY_MARKER_FILE", "app.toml")
        .env_remove("APPDEPLOY_DISCOVERY_INCLUDE_HIDDEN")
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "api\nweb\n");
    Ok(())
}
