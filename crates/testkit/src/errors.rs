//! Error envelopes an app lister reports, for use with in-memory fakes.

use appdeploy_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::path::Path;

/// The error an app lister reports for a missing base path.
pub fn base_path_not_found_error(base_path: &Path) -> ErrorEnvelope {
    ErrorEnvelope::expected(
        ErrorCode::new("apps", "base_path_not_found"),
        format!("base path does not exist: {}", base_path.display()),
    )
    .with_metadata("base_path", base_path.to_string_lossy().to_string())
}

/// A non-retriable enumeration failure carrying the base path.
pub fn enumeration_failed_error(base_path: &Path) -> ErrorEnvelope {
    ErrorEnvelope::unexpected(
        ErrorCode::enumeration_failed(),
        "failed to enumerate apps",
        ErrorClass::NonRetriable,
    )
    .with_metadata("base_path", base_path.to_string_lossy().to_string())
}
