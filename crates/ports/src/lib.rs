//! # appdeploy-ports
//!
//! Port traits for the appdeploy hexagonal architecture.
//!
//! This crate defines the interfaces between the use cases and the outside
//! world (filesystem app discovery, console output). It depends only on
//! `domain` and `shared`.

use std::future::Future;
use std::pin::Pin;

/// Boxed future used by port traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod app_lister;
pub mod console;

pub use app_lister::*;
pub use console::*;

// Re-export domain types used in port signatures, so adapter crates can
// implement ports without directly depending on `appdeploy-domain`.
pub use appdeploy_domain::{AppList, AppName};
