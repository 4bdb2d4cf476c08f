//! # appdeploy-adapters
//!
//! Adapter implementations for ports (filesystem app discovery, terminal output).
//! This crate depends on `ports`, `config`, `domain`, and `shared`.

pub mod app_lister;
pub mod console;
pub mod console_sink;

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub use app_lister::LocalAppLister;
pub use console::{NO_COLOR_ENV, TerminalConsole, color_enabled_from_env};
pub use console_sink::{ConsoleSink, StderrSink, StdoutSink, WriterSink};
