//! Composition tests: config sources, local adapters, and normalization together.

use appdeploy_app::EMPTY_APP_LIST_WARNING;
use appdeploy_config::{ENV_BASE_PATH, ENV_DISCOVERY_MARKER_FILE};
use appdeploy_domain::{ALL_APPS_KEY, AppName, Args, parse_app_list};
use appdeploy_infra::{
    ConfigSources, InfraResult, ResolveRequest, run_list_apps_local, run_resolve_local,
};
use appdeploy_shared::{ErrorCode, ErrorEnvelope};
use appdeploy_testkit::fixtures::{fixture_path, sample_apps_dir};
use appdeploy_testkit::in_memory::RecordingConsole;
use std::collections::BTreeMap;
use std::sync::Arc;

fn sources_for_sample_tree() -> ConfigSources {
    ConfigSources {
        env: BTreeMap::from([
            (
                ENV_BASE_PATH.to_owned(),
                sample_apps_dir().to_string_lossy().to_string(),
            ),
            (ENV_DISCOVERY_MARKER_FILE.to_owned(), "app.toml".to_owned()),
        ]),
        ..ConfigSources::default()
    }
}

#[test]
fn resolve_all_apps_reads_configured_tree() -> InfraResult<()> {
    let console = Arc::new(RecordingConsole::default());
    let request = ResolveRequest {
        args: [(ALL_APPS_KEY, true)].into_iter().collect(),
        apps: None,
        sources: sources_for_sample_tree(),
    };

    let resolved = run_resolve_local(request, console.clone())?;

    let names: Vec<&str> = resolved.apps.iter().map(AppName::as_str).collect();
    assert_eq!(names, vec!["api", "web"]);
    assert_eq!(resolved.config.base_path, sample_apps_dir());
    assert!(console.notices().is_empty());
    Ok(())
}

#[test]
fn resolve_explicit_apps_never_touches_disk() -> InfraResult<()> {
    let console = Arc::new(RecordingConsole::default());
    let apps = parse_app_list(["billing"]).map_err(ErrorEnvelope::from)?;
    let request = ResolveRequest {
        args: Args::new(),
        apps: Some(apps.clone()),
        sources: ConfigSources {
            base_path_override: Some(sample_apps_dir().join("missing")),
            ..ConfigSources::default()
        },
    };

    let resolved = run_resolve_local(request, console.clone())?;
    assert_eq!(resolved.apps, apps);
    assert_eq!(
        resolved.args.environment().and_then(|value| value.as_str()),
        Some("dev")
    );
    assert!(console.notices().is_empty());
    Ok(())
}

#[test]
fn resolve_without_apps_warns() -> InfraResult<()> {
    let console = Arc::new(RecordingConsole::default());
    let resolved = run_resolve_local(ResolveRequest::default(), console.clone())?;
    assert!(resolved.apps.is_empty());
    assert_eq!(console.messages(), vec![EMPTY_APP_LIST_WARNING]);
    Ok(())
}

#[test]
fn config_file_feeds_lister() -> InfraResult<()> {
    let sources = ConfigSources {
        config_path: Some(fixture_path("config/deploy.valid.toml")),
        base_path_override: Some(sample_apps_dir()),
        ..ConfigSources::default()
    };
    // the TOML fixture turns on include_hidden
    let apps = run_list_apps_local(&sources)?;
    let names: Vec<&str> = apps.iter().map(AppName::as_str).collect();
    assert_eq!(names, vec![".staging", "api", "web", "worker"]);
    Ok(())
}

#[test]
fn invalid_env_fails_before_listing() {
    let sources = ConfigSources {
        env: BTreeMap::from([(ENV_BASE_PATH.to_owned(), String::new())]),
        ..ConfigSources::default()
    };
    let error = run_list_apps_local(&sources).err();
    assert_eq!(
        error.map(|error| error.code),
        Some(ErrorCode::new("config", "empty_env_var"))
    );
}
