//! In-memory adapter implementations for port contracts.
//!
//! These implementations are intended for:
//! - Unit/integration tests of option normalization
//! - Deterministic contract tests for the ports layer

use appdeploy_ports::{AppList, AppListerPort, BoxFuture, ConsoleNotice, ConsolePort};
use appdeploy_shared::{ErrorEnvelope, Result};
use std::path::PathBuf;
use std::sync::Mutex;

/// App lister returning a fixed list and recording every base path it saw.
#[derive(Debug, Default)]
pub struct StaticAppLister {
    apps: AppList,
    calls: Mutex<Vec<PathBuf>>,
}

impl StaticAppLister {
    /// Create a lister that always answers with `apps`.
    #[must_use]
    pub fn new(apps: AppList) -> Self {
        Self {
            apps,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Base paths passed to `list_all_apps`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Number of `list_all_apps` invocations.
    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl AppListerPort for StaticAppLister {
    fn list_all_apps(&self, base_path: PathBuf) -> BoxFuture<'_, Result<AppList>> {
        Box::pin(async move {
            if let Ok(mut guard) = self.calls.lock() {
                guard.push(base_path);
            }
            Ok(self.apps.clone())
        })
    }
}

/// App lister that always fails with the provided envelope.
#[derive(Debug)]
pub struct FailingAppLister {
    error: ErrorEnvelope,
    calls: Mutex<usize>,
}

impl FailingAppLister {
    /// Create a lister that always returns `error`.
    #[must_use]
    pub const fn new(error: ErrorEnvelope) -> Self {
        Self {
            error,
            calls: Mutex::new(0),
        }
    }

    /// Number of `list_all_apps` invocations.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|guard| *guard).unwrap_or_default()
    }
}

impl AppListerPort for FailingAppLister {
    fn list_all_apps(&self, _base_path: PathBuf) -> BoxFuture<'_, Result<AppList>> {
        Box::pin(async move {
            if let Ok(mut guard) = self.calls.lock() {
                *guard += 1;
            }
            Err(self.error.clone())
        })
    }
}

/// Console that keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    notices: Mutex<Vec<ConsoleNotice>>,
}

impl RecordingConsole {
    /// Snapshot of recorded notices.
    pub fn notices(&self) -> Vec<ConsoleNotice> {
        self.notices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Messages of recorded notices, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .map(|notice| notice.message.into_string())
            .collect()
    }
}

impl ConsolePort for RecordingConsole {
    fn emit(&self, notice: ConsoleNotice) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.push(notice);
        }
    }
}
