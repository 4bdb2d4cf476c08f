//! Validation failures for domain values.

use appdeploy_shared::{ErrorCode, ErrorEnvelope};
use std::fmt;

/// Validation failures for app names and CLI argument assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// `AppName` is empty after trimming.
    EmptyAppName {
        /// Length of the raw input before trimming.
        input_length: usize,
    },
    /// `AppName` contains a path separator, a control character, or is a
    /// relative path component (`.` / `..`).
    InvalidAppName {
        /// Trimmed app name that failed validation.
        input: String,
    },
    /// Argument assignment is not of the form `key=value`.
    InvalidArgAssignment {
        /// Raw assignment text.
        input: String,
    },
    /// Argument key is empty after trimming.
    EmptyArgKey,
}

impl DomainError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyAppName { .. } | Self::InvalidAppName { .. } => {
                ErrorCode::new("domain", "invalid_app_name")
            },
            Self::InvalidArgAssignment { .. } | Self::EmptyArgKey => {
                ErrorCode::new("domain", "invalid_arg")
            },
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAppName { .. } => formatter.write_str("app name must be non-empty"),
            Self::InvalidAppName { input } => write!(
                formatter,
                "app name `{input}` must be a single path segment without control characters"
            ),
            Self::InvalidArgAssignment { input } => {
                write!(formatter, "argument `{input}` must look like key=value")
            },
            Self::EmptyArgKey => formatter.write_str("argument key must be non-empty"),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<DomainError> for ErrorEnvelope {
    fn from(error: DomainError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            DomainError::EmptyAppName { input_length } => {
                envelope.with_metadata("input_length", input_length.to_string())
            },
            DomainError::InvalidAppName { input } | DomainError::InvalidArgAssignment { input } => {
                envelope.with_metadata("input", input)
            },
            DomainError::EmptyArgKey => envelope,
        }
    }
}
