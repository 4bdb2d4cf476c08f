use appdeploy_infra::InfraError;
use appdeploy_shared::ErrorKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Ok = 0,
    InvalidInput = 2,
    Io = 3,
    Internal = 1,
}

impl ExitCode {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Debug)]
pub enum CliError {
    InvalidInput(String),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Infra(InfraError),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidInput(_) => ExitCode::InvalidInput,
            Self::Io(_) => ExitCode::Io,
            Self::Serialization(_) => ExitCode::Internal,
            Self::Infra(error) => infra_exit_code(error),
        }
    }
}

/// Filesystem-facing failures exit with `Io`; other expected errors are input errors.
pub fn infra_exit_code(error: &InfraError) -> ExitCode {
    let filesystem = error.is_io()
        || error.code.namespace() == "apps"
        || matches!(
            (error.code.namespace(), error.code.code()),
            (
                "config",
                "config_file_not_found" | "config_file_permission_denied" | "config_file_io"
            )
        );
    match (filesystem, error.kind) {
        (true, _) => ExitCode::Io,
        (false, ErrorKind::Expected) => ExitCode::InvalidInput,
        (false, ErrorKind::Unexpected) => ExitCode::Internal,
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(formatter, "invalid input: {message}"),
            Self::Io(error) => write!(formatter, "io error: {error}"),
            Self::Serialization(error) => write!(formatter, "serialization error: {error}"),
            Self::Infra(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}

impl From<InfraError> for CliError {
    fn from(error: InfraError) -> Self {
        Self::Infra(error)
    }
}
