//! Deployment arguments: option names mapped to loosely typed values.
//!
//! Values follow the truthiness rules the deployment scripts have always used:
//! `null`, `false`, `0` and the empty string are falsy, everything else is
//! truthy. Defaulting decisions are made on truthiness, not on presence.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Option key holding the deployment environment.
pub const ENVIRONMENT_KEY: &str = "environment";

/// Option key requesting expansion to every known app.
pub const ALL_APPS_KEY: &str = "all-apps";

/// Environment applied when `environment` is absent or falsy.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// A single argument value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Explicit null.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(Box<str>),
}

impl ArgValue {
    /// Returns true when the value counts as set.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Text(value) => !value.is_empty(),
        }
    }

    /// Borrow the text payload, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Interpret a raw command-line value: `true`/`false` become booleans,
    /// decimal integers become numbers, everything else stays text.
    #[must_use]
    pub fn from_cli(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            other => other
                .parse::<i64>()
                .map_or_else(|_| Self::Text(other.into()), Self::Int),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Text(value) => formatter.write_str(value),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value.into_boxed_str())
    }
}

/// Option name to value mapping, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args(BTreeMap<Box<str>, ArgValue>);

impl Args {
    /// Create an empty argument map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by option name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.get(key)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<Box<str>>,
        value: impl Into<ArgValue>,
    ) -> Option<ArgValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns true when the option is present and truthy.
    #[must_use]
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(ArgValue::is_truthy)
    }

    /// The `environment` value, if present.
    #[must_use]
    pub fn environment(&self) -> Option<&ArgValue> {
        self.get(ENVIRONMENT_KEY)
    }

    /// Whether the `all-apps` flag is set.
    #[must_use]
    pub fn all_apps(&self) -> bool {
        self.is_truthy(ALL_APPS_KEY)
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(key, value)| (key.as_ref(), value))
    }

    /// Parse a `key=value` assignment into a trimmed key and a CLI value.
    pub fn parse_assignment(input: &str) -> Result<(Box<str>, ArgValue), DomainError> {
        let Some((key, value)) = input.split_once('=') else {
            return Err(DomainError::InvalidArgAssignment {
                input: input.to_owned(),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::EmptyArgKey);
        }
        Ok((key.into(), ArgValue::from_cli(value)))
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<Box<str>>,
    V: Into<ArgValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
