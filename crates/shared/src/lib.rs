//! # appdeploy-shared
//!
//! Shared result and error types for the appdeploy workspace.
//!
//! Every other crate reports failures as an [`ErrorEnvelope`]: a stable,
//! namespaced [`ErrorCode`] plus a kind, a retry class, and free-form metadata.
//! The CLI maps envelopes onto process exit codes.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod result;

pub use errors::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use result::Result;

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
