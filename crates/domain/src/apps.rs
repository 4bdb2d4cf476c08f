//! Application identifiers and the base-path contract.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Ordered sequence of application identifiers. May be empty.
pub type AppList = Vec<AppName>;

/// Identifier of a deployable application (a single directory name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppName(Box<str>);

impl AppName {
    /// Parse an app name from user input.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = input.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyAppName {
                input_length: raw.len(),
            });
        }
        if matches!(trimmed, "." | "..")
            || trimmed.contains(['/', '\\'])
            || trimmed.chars().any(char::is_control)
        {
            return Err(DomainError::InvalidAppName {
                input: trimmed.to_owned(),
            });
        }

        Ok(Self(trimmed.into()))
    }

    /// Access the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Parse a batch of app names, failing on the first invalid entry.
pub fn parse_app_list<I, S>(inputs: I) -> Result<AppList, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs.into_iter().map(AppName::parse).collect()
}

/// Configuration that knows where applications live on disk.
///
/// The rest of the configuration is opaque to option normalization; only the
/// base path is needed to enumerate apps.
pub trait BasePath {
    /// Filesystem root used to discover applications.
    fn base_path(&self) -> &Path;
}

impl BasePath for PathBuf {
    fn base_path(&self) -> &Path {
        self
    }
}

impl<T: BasePath + ?Sized> BasePath for Arc<T> {
    fn base_path(&self) -> &Path {
        (**self).base_path()
    }
}

impl<T: BasePath + ?Sized> BasePath for &T {
    fn base_path(&self) -> &Path {
        (**self).base_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_trimmed() -> Result<(), DomainError> {
        let name = AppName::parse("  billing-api ")?;
        assert_eq!(name.as_str(), "billing-api");
        Ok(())
    }

    #[test]
    fn app_name_rejects_empty_input() {
        assert!(matches!(
            AppName::parse("   "),
            Err(DomainError::EmptyAppName { input_length: 3 })
        ));
    }

    #[test]
    fn app_name_rejects_path_like_input() {
        for input in ["..", ".", "a/b", "a\\b", "tab\there"] {
            assert!(
                matches!(AppName::parse(input), Err(DomainError::InvalidAppName { .. })),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn parse_app_list_preserves_order() -> Result<(), DomainError> {
        let apps = parse_app_list(["web", "api", "worker"])?;
        let names: Vec<&str> = apps.iter().map(AppName::as_str).collect();
        assert_eq!(names, vec!["web", "api", "worker"]);
        Ok(())
    }

    #[test]
    fn base_path_is_forwarded_through_arc() {
        let config = Arc::new(PathBuf::from("/srv/apps"));
        assert_eq!(config.base_path(), Path::new("/srv/apps"));
    }
}
