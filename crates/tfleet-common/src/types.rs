//! Domain primitive types used across the tfleet workspace.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TfleetError};

/// Checks that `value` is usable as a Terraform identifier.
///
/// Identifiers start with a letter or underscore and continue with letters,
/// digits, underscores, or dashes.
///
/// # Errors
///
/// Returns [`TfleetError::InvalidName`] describing the first violated rule.
pub fn validate_identifier(value: &str) -> Result<()> {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Err(invalid(value, "name must not be empty"));
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid(value, "name must start with a letter or underscore"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(invalid(
            value,
            "name may only contain letters, digits, underscores, and dashes",
        ));
    }
    Ok(())
}

fn invalid(name: &str, reason: &'static str) -> TfleetError {
    TfleetError::InvalidName {
        name: name.to_string(),
        reason,
    }
}

/// Name of a resource block (unique within its kind) or of a module block.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName(String);

impl ResourceName {
    /// Creates a resource name after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or not a valid identifier.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name)?;
        Ok(Self(name))
    }

    /// Returns the `{name}_{index}` name of one fleet member.
    #[must_use]
    pub fn indexed(&self, index: usize) -> Self {
        Self(format!("{}_{index}", self.0))
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceName {
    type Error = TfleetError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.0
    }
}

impl Borrow<str> for ResourceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resource type grouping key, e.g. `null_resource`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceKind(String);

impl ResourceKind {
    /// Creates a resource kind after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind is empty or not a valid identifier.
    pub fn new(kind: impl Into<String>) -> Result<Self> {
        let kind = kind.into();
        validate_identifier(&kind)?;
        Ok(Self(kind))
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ResourceKind {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_RESOURCE_KIND.to_string())
    }
}

impl TryFrom<String> for ResourceKind {
    type Error = TfleetError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for ResourceKind {
    type Err = TfleetError;

    fn from_str(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.0
    }
}

impl Borrow<str> for ResourceKind {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Freshness marker stamped into generated triggers.
///
/// Every stamp carries a random UUID, so two stamps never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessStamp {
    /// Random v4 UUID.
    pub id: String,
    /// RFC 3339 UTC timestamp of creation.
    pub timestamp: String,
}

impl FreshnessStamp {
    /// Generates a stamp for the current instant.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
        }
    }
}
