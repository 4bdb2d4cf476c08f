//! # appdeploy-domain
//!
//! Domain values shared by every layer of appdeploy:
//!
//! - **Args** - option name to loosely typed value map, with truthiness rules
//! - **Apps** - validated `AppName`s and ordered `AppList`s
//! - **`BasePath`** - the single thing option normalization needs from config
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared`
//! - No I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod apps;
pub mod args;
pub mod error;

pub use apps::{AppList, AppName, BasePath, parse_app_list};
pub use args::{ALL_APPS_KEY, ArgValue, Args, DEFAULT_ENVIRONMENT, ENVIRONMENT_KEY};
pub use error::DomainError;

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
