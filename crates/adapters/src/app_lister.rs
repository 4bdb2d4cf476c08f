//! Filesystem app enumeration.
//!
//! Every immediate subdirectory of the base path is an app, subject to the
//! hidden-directory and marker-file filters.

use appdeploy_config::DiscoveryConfig;
use appdeploy_domain::AppName;
use appdeploy_ports::{AppList, AppListerPort, BoxFuture};
use appdeploy_shared::{ErrorClass, ErrorCode, ErrorEnvelope, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Local filesystem app lister using async IO.
#[derive(Debug, Clone, Default)]
pub struct LocalAppLister {
    include_hidden: bool,
    marker_file: Option<Box<str>>,
}

impl LocalAppLister {
    /// Build a lister with explicit filters.
    pub const fn new(include_hidden: bool, marker_file: Option<Box<str>>) -> Self {
        Self {
            include_hidden,
            marker_file,
        }
    }

    /// Build a lister from the `discovery` config table.
    pub fn from_discovery(discovery: &DiscoveryConfig) -> Self {
        Self::new(discovery.include_hidden, discovery.marker_file.clone())
    }

    async fn is_app_dir(&self, path: &Path) -> bool {
        let Some(marker) = self.marker_file.as_deref() else {
            return true;
        };
        tokio::fs::metadata(path.join(marker))
            .await
            .is_ok_and(|metadata| metadata.is_file())
    }
}

impl AppListerPort for LocalAppLister {
    fn list_all_apps(&self, base_path: PathBuf) -> BoxFuture<'_, Result<AppList>> {
        Box::pin(async move {
            let metadata = tokio::fs::metadata(&base_path)
                .await
                .map_err(|error| enumeration_error(&base_path, &error))?;
            if !metadata.is_dir() {
                return Err(ErrorEnvelope::expected(
                    ErrorCode::new("apps", "base_path_not_directory"),
                    format!("base path is not a directory: {}", base_path.display()),
                )
                .with_metadata("base_path", base_path.to_string_lossy().to_string()));
            }

            let mut read_dir = tokio::fs::read_dir(&base_path)
                .await
                .map_err(|error| enumeration_error(&base_path, &error))?;
            let mut apps = Vec::new();

            while let Some(entry) = read_dir
                .next_entry()
                .await
                .map_err(|error| enumeration_error(&base_path, &error))?
            {
                let path = entry.path();
                // follows symlinks; dangling links are skipped
                let is_dir = tokio::fs::metadata(&path)
                    .await
                    .is_ok_and(|metadata| metadata.is_dir());
                if !is_dir {
                    continue;
                }

                let Ok(name) = entry.file_name().into_string() else {
                    tracing::debug!(
                        target: "appdeploy.apps",
                        path = %path.display(),
                        "skipping non UTF-8 directory name"
                    );
                    continue;
                };
                if name.starts_with('.') && !self.include_hidden {
                    continue;
                }
                // parsing trims, so a padded name would not point at this directory
                let Some(app) = AppName::parse(&name).ok().filter(|app| app.as_str() == name)
                else {
                    continue;
                };
                if self.is_app_dir(&path).await {
                    apps.push(app);
                }
            }

            apps.sort();
            tracing::debug!(
                target: "appdeploy.apps",
                base_path = %base_path.display(),
                count = apps.len(),
                "apps listed"
            );
            Ok(apps)
        })
    }
}

fn enumeration_error(base_path: &Path, error: &io::Error) -> ErrorEnvelope {
    let base_path_meta = base_path.to_string_lossy().to_string();
    if error.kind() == io::ErrorKind::NotFound {
        return ErrorEnvelope::expected(
            ErrorCode::new("apps", "base_path_not_found"),
            format!("base path does not exist: {}", base_path.display()),
        )
        .with_metadata("base_path", base_path_meta);
    }

    let class = match error.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock => {
            ErrorClass::Retriable
        },
        _ => ErrorClass::NonRetriable,
    };
    ErrorEnvelope::unexpected(
        ErrorCode::enumeration_failed(),
        format!("failed to enumerate apps: {error}"),
        class,
    )
    .with_metadata("base_path", base_path_meta)
    .with_metadata("io_kind", format!("{:?}", error.kind()))
}
