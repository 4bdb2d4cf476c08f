//! App enumeration boundary contract.

use crate::BoxFuture;
use appdeploy_domain::AppList;
use appdeploy_shared::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Boundary contract for discovering every app under a base path.
///
/// Failures (missing base path, permission errors) are returned as-is;
/// callers do not translate them.
pub trait AppListerPort: Send + Sync {
    /// List every app known under `base_path`.
    fn list_all_apps(&self, base_path: PathBuf) -> BoxFuture<'_, Result<AppList>>;
}

impl<T: AppListerPort + ?Sized> AppListerPort for Arc<T> {
    fn list_all_apps(&self, base_path: PathBuf) -> BoxFuture<'_, Result<AppList>> {
        (**self).list_all_apps(base_path)
    }
}
