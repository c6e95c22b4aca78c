// crates/domain/src/key.rs
use std::{fmt, str::FromStr};

use envstamp_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

pub const DEFAULT_VERSION_KEY: &str = "APP_VERSION";
pub const DEFAULT_BUILD_DATE_KEY: &str = "APP_BUILD_DATE";

/// Name on the left-hand side of a `KEY=VALUE` line.
///
/// Restricted to `[A-Za-z_][A-Za-z0-9_]*` so a key can never contain `=` or
/// whitespace and the `KEY=` prefix match stays unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryKey(String);

impl EntryKey {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let invalid = |reason: &str| DomainError::InvalidKey {
            key: raw.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = raw.chars();
        match chars.next() {
            None => return Err(invalid("must not be empty")),
            Some(c) if c.is_ascii_digit() => return Err(invalid("must not start with a digit")),
            Some(_) => {}
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("only ASCII letters, digits and '_' are allowed"));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when `line` is an assignment to this key (`^KEY=`).
    #[must_use]
    pub fn matches_line(&self, line: &str) -> bool {
        line.strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with('='))
    }
}

impl FromStr for EntryKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two keys this tool owns, applied version first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StampKeys {
    pub version: EntryKey,
    pub build_date: EntryKey,
}

impl StampKeys {
    pub fn new(version: EntryKey, build_date: EntryKey) -> DomainResult<Self> {
        if version == build_date {
            return Err(DomainError::DuplicateKeys { key: version.0 });
        }
        Ok(Self {
            version,
            build_date,
        })
    }
}

impl Default for StampKeys {
    fn default() -> Self {
        Self {
            version: EntryKey(DEFAULT_VERSION_KEY.to_string()),
            build_date: EntryKey(DEFAULT_BUILD_DATE_KEY.to_string()),
        }
    }
}
