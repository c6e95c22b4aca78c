// crates/shared-kernel/src/value_objects/version.rs
use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

fn reject_line_breaks(value: &str) -> Option<&'static str> {
    value
        .contains(['\n', '\r'])
        .then_some("must not contain line breaks")
}

/// Nominal version taken from the manifest. Opaque: never semver-validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeclaredVersion(String);

impl DeclaredVersion {
    /// Trim surrounding whitespace and reject empty or multi-line values.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = raw.trim();
        let reason = if value.is_empty() {
            Some("must not be empty")
        } else {
            reject_line_breaks(value)
        };
        match reason {
            Some(reason) => Err(DomainError::InvalidVersion {
                value: raw.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(Self(value.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DeclaredVersion {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<DeclaredVersion> for String {
    fn from(value: DeclaredVersion) -> Self {
        value.0
    }
}

impl FromStr for DeclaredVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Deref for DeclaredVersion {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for DeclaredVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short source-control revision identifier, e.g. `abc1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RevisionId(String);

impl RevisionId {
    /// Accepts the trimmed output of a revision query or a caller-supplied id.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = raw.trim();
        let reason = if value.is_empty() {
            Some("must not be empty")
        } else if value.chars().any(char::is_whitespace) {
            Some("must be a single token without whitespace")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(DomainError::InvalidRevision {
                value: raw.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(Self(value.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RevisionId {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<RevisionId> for String {
    fn from(value: RevisionId) -> Self {
        value.0
    }
}

impl FromStr for RevisionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<declared>` or `<declared>-<revision>`, computed once per run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CompositeVersion(String);

impl CompositeVersion {
    #[must_use]
    pub fn compose(declared: &DeclaredVersion, revision: Option<&RevisionId>) -> Self {
        match revision {
            Some(rev) => Self(format!("{declared}-{rev}")),
            None => Self(declared.as_str().to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CompositeVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
