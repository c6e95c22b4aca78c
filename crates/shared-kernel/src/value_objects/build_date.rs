// crates/shared-kernel/src/value_objects/build_date.rs
use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of the build, always UTC, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildDate(NaiveDate);

impl BuildDate {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Calendar day of `instant` in UTC.
    #[must_use]
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }

    /// Strict `YYYY-MM-DD`; chrono alone would also accept unpadded fields.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = raw.trim();
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .ok()
            .map(Self)
            .filter(|date| date.to_string() == value)
            .ok_or_else(|| DomainError::InvalidDate {
                value: raw.to_string(),
            })
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl FromStr for BuildDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BuildDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for BuildDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
