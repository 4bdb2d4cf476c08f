//! Normalize deployment options before a deploy command runs.
//!
//! Normalization defaults the target environment, expands `all-apps` through
//! the app lister, and warns on the console when no app is selected. The
//! config value is moved through untouched.

use appdeploy_domain::{AppList, Args, BasePath, DEFAULT_ENVIRONMENT, ENVIRONMENT_KEY};
use appdeploy_ports::{AppListerPort, ConsolePort, NoticeStyle};
use appdeploy_shared::Result;
use serde::Serialize;
use std::sync::Arc;

/// Console warning emitted when the final app list is empty.
pub const EMPTY_APP_LIST_WARNING: &str = "The provided array of app names is empty.";

/// Input payload for option normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptionsInput<C> {
    /// Raw option map. `None` behaves like an empty map.
    pub args: Option<Args>,
    /// Explicitly requested apps. `None` behaves like an empty list.
    pub apps: Option<AppList>,
    /// Caller-owned configuration.
    pub config: C,
}

impl<C> NormalizeOptionsInput<C> {
    /// Input with no args and no apps.
    pub const fn new(config: C) -> Self {
        Self {
            args: None,
            apps: None,
            config,
        }
    }

    /// Set the option map.
    #[must_use]
    pub fn with_args(mut self, args: Args) -> Self {
        self.args = Some(args);
        self
    }

    /// Set the requested apps.
    #[must_use]
    pub fn with_apps(mut self, apps: AppList) -> Self {
        self.apps = Some(apps);
        self
    }
}

/// Normalized options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedOptions<C> {
    /// Option map with a truthy `environment`.
    pub args: Args,
    /// Final app list, possibly empty.
    pub apps: AppList,
    /// The config passed in, unchanged.
    pub config: C,
}

/// Dependencies required by option normalization.
#[derive(Clone)]
pub struct NormalizeOptionsDeps {
    /// Enumerates every app under a base path.
    pub app_lister: Arc<dyn AppListerPort>,
    /// Receives the empty-list warning.
    pub console: Arc<dyn ConsolePort>,
}

/// Return `args` (or an empty map) with `environment` defaulted when falsy.
#[must_use]
pub fn apply_environment_default(args: Option<Args>) -> Args {
    let mut args = args.unwrap_or_default();
    if !args.is_truthy(ENVIRONMENT_KEY) {
        args.insert(ENVIRONMENT_KEY, DEFAULT_ENVIRONMENT);
    }
    args
}

/// Normalize `input`.
///
/// With `all-apps` set, the requested list is replaced by whatever the app
/// lister finds under `config.base_path()`. Lister failures are returned
/// as-is and nothing is printed in that case.
#[tracing::instrument(name = "appdeploy.normalize", skip_all)]
pub async fn normalize_options<C: BasePath>(
    deps: &NormalizeOptionsDeps,
    input: NormalizeOptionsInput<C>,
) -> Result<NormalizedOptions<C>> {
    let NormalizeOptionsInput { args, apps, config } = input;

    let args = apply_environment_default(args);
    let mut apps = apps.unwrap_or_default();

    if args.all_apps() {
        let base_path = config.base_path().to_path_buf();
        tracing::debug!(
            target: "appdeploy.normalize.all_apps",
            base_path = %base_path.display(),
            requested = apps.len(),
            "expanding all apps"
        );
        apps = deps
            .app_lister
            .list_all_apps(base_path)
            .await
            .inspect_err(|error| {
                tracing::debug!(
                    target: "appdeploy.normalize.failed",
                    code = %error.code,
                    "app enumeration failed"
                );
            })?;
    }

    if apps.is_empty() {
        deps.console.warn(EMPTY_APP_LIST_WARNING, NoticeStyle::Highlight);
    }

    tracing::debug!(
        target: "appdeploy.normalize.completed",
        environment = %args.environment().map(ToString::to_string).unwrap_or_default(),
        apps = apps.len(),
        "options normalized"
    );

    Ok(NormalizedOptions { args, apps, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use appdeploy_domain::{ALL_APPS_KEY, ArgValue, parse_app_list};
    use appdeploy_ports::{ConsoleNotice, NoticeLevel};
    use appdeploy_shared::ErrorEnvelope;
    use appdeploy_testkit::errors::base_path_not_found_error;
    use appdeploy_testkit::in_memory::{FailingAppLister, RecordingConsole, StaticAppLister};
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    fn deps_with(
        lister: Arc<dyn AppListerPort>,
    ) -> (NormalizeOptionsDeps, Arc<RecordingConsole>) {
        let console = Arc::new(RecordingConsole::default());
        let deps = NormalizeOptionsDeps {
            app_lister: lister,
            console: console.clone(),
        };
        (deps, console)
    }

    #[test]
    fn missing_args_become_dev_environment() {
        let args = apply_environment_default(None);
        assert_eq!(args.len(), 1);
        assert_eq!(args.environment(), Some(&ArgValue::from("dev")));
    }

    #[test]
    fn truthy_environment_is_kept() {
        let args: Args = [(ENVIRONMENT_KEY, ArgValue::from("production"))]
            .into_iter()
            .collect();
        let args = apply_environment_default(Some(args));
        assert_eq!(args.environment(), Some(&ArgValue::from("production")));
    }

    proptest! {
        #[test]
        fn falsy_environment_defaults_to_dev(
            value in prop_oneof![
                Just(ArgValue::Null),
                Just(ArgValue::Bool(false)),
                Just(ArgValue::Int(0)),
                Just(ArgValue::from("")),
            ]
        ) {
            let args: Args = [(ENVIRONMENT_KEY, value)].into_iter().collect();
            let args = apply_environment_default(Some(args));
            prop_assert_eq!(args.environment(), Some(&ArgValue::from(DEFAULT_ENVIRONMENT)));
        }

        #[test]
        fn environment_is_always_truthy(name in "[a-z]{0,8}", other in "[a-z]{1,8}") {
            let args: Args = [
                (ENVIRONMENT_KEY.to_owned(), name.clone()),
                ("region".to_owned(), other.clone()),
            ]
            .into_iter()
            .collect();
            let args = apply_environment_default(Some(args));
            prop_assert!(args.is_truthy(ENVIRONMENT_KEY));
            if !name.is_empty() {
                prop_assert_eq!(args.environment(), Some(&ArgValue::from(name)));
            }
            prop_assert_eq!(args.get("region"), Some(&ArgValue::from(other)));
        }
    }

    #[tokio::test]
    async fn empty_input_warns_once_without_listing() -> Result<()> {
        let lister = Arc::new(StaticAppLister::default());
        let (deps, console) = deps_with(lister.clone());

        let output = normalize_options(
            &deps,
            NormalizeOptionsInput::new(PathBuf::from("/x"))
                .with_args(Args::new())
                .with_apps(Vec::new()),
        )
        .await?;

        assert_eq!(output.args, apply_environment_default(None));
        assert!(output.apps.is_empty());
        assert_eq!(output.config, PathBuf::from("/x"));
        assert_eq!(lister.call_count(), 0);
        assert_eq!(
            console.notices(),
            vec![ConsoleNotice {
                level: NoticeLevel::Warn,
                message: EMPTY_APP_LIST_WARNING.into(),
                style: NoticeStyle::Highlight,
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn all_apps_uses_lister_result_for_base_path() -> Result<()> {
        let found = parse_app_list(["svc1", "svc2"]).map_err(ErrorEnvelope::from)?;
        let lister = Arc::new(StaticAppLister::new(found.clone()));
        let (deps, console) = deps_with(lister.clone());
        let args: Args = [(ALL_APPS_KEY, true)].into_iter().collect();

        let output = normalize_options(
            &deps,
            NormalizeOptionsInput::new(PathBuf::from("/x")).with_args(args),
        )
        .await?;

        assert_eq!(output.apps, found);
        assert_eq!(lister.calls(), vec![PathBuf::from("/x")]);
        assert!(console.notices().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn all_apps_overwrites_requested_list() -> Result<()> {
        let found = parse_app_list(["svc1"]).map_err(ErrorEnvelope::from)?;
        let requested = parse_app_list(["legacy", "svc1"]).map_err(ErrorEnvelope::from)?;
        let (deps, _console) = deps_with(Arc::new(StaticAppLister::new(found.clone())));
        let args: Args = [(ALL_APPS_KEY, true)].into_iter().collect();

        let output = normalize_options(
            &deps,
            NormalizeOptionsInput::new(PathBuf::from("/x"))
                .with_args(args)
                .with_apps(requested),
        )
        .await?;

        assert_eq!(output.apps, found);
        Ok(())
    }

    #[tokio::test]
    async fn all_apps_with_empty_result_still_warns() -> Result<()> {
        let lister = Arc::new(StaticAppLister::default());
        let (deps, console) = deps_with(lister.clone());
        let args: Args = [(ALL_APPS_KEY, ArgValue::from("yes"))].into_iter().collect();

        let input = NormalizeOptionsInput::new(PathBuf::from("/x")).with_args(args);
        let output = normalize_options(&deps, input).await?;

        assert!(output.apps.is_empty());
        assert_eq!(lister.call_count(), 1);
        assert_eq!(console.messages(), vec![EMPTY_APP_LIST_WARNING]);
        Ok(())
    }

    #[tokio::test]
    async fn falsy_all_apps_keeps_requested_list() -> Result<()> {
        let requested = parse_app_list(["web"]).map_err(ErrorEnvelope::from)?;
        let lister = Arc::new(StaticAppLister::default());
        let (deps, console) = deps_with(lister.clone());
        let args: Args = [(ALL_APPS_KEY, ArgValue::Int(0))].into_iter().collect();

        let output = normalize_options(
            &deps,
            NormalizeOptionsInput::new(PathBuf::from("/x"))
                .with_args(args)
                .with_apps(requested.clone()),
        )
        .await?;

        assert_eq!(output.apps, requested);
        assert_eq!(lister.call_count(), 0);
        assert!(console.notices().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn lister_failure_propagates_unchanged() {
        let error = base_path_not_found_error(Path::new("/missing"));
        let (deps, console) = deps_with(Arc::new(FailingAppLister::new(error.clone())));
        let args: Args = [(ALL_APPS_KEY, true)].into_iter().collect();

        let result = normalize_options(
            &deps,
            NormalizeOptionsInput::new(Path::new("/missing").to_path_buf()).with_args(args),
        )
        .await;

        assert_eq!(result.err(), Some(error));
        assert!(console.notices().is_empty());
    }
}
