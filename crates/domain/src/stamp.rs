// crates/domain/src/stamp.rs
use envstamp_shared_kernel::{BuildDate, CompositeVersion, DeclaredVersion, RevisionId};
use serde::Serialize;

use crate::{
    document::{ConfigDocument, ConfigEntry, UpsertOutcome},
    key::StampKeys,
};

/// Values written by one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StampValues {
    pub version: CompositeVersion,
    pub build_date: BuildDate,
}

impl StampValues {
    #[must_use]
    pub fn compute(
        declared: &DeclaredVersion,
        revision: Option<&RevisionId>,
        build_date: BuildDate,
    ) -> Self {
        Self {
            version: CompositeVersion::compose(declared, revision),
            build_date,
        }
    }
}

/// Per-key result of [`apply_stamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StampOutcome {
    pub version: UpsertOutcome,
    pub build_date: UpsertOutcome,
}

/// Upsert the version entry, then the build-date entry.
pub fn apply_stamp(
    document: &mut ConfigDocument,
    keys: &StampKeys,
    values: &StampValues,
) -> StampOutcome {
    let version = document.upsert(&ConfigEntry::version(&keys.version, &values.version));
    let date_entry = ConfigEntry::build_date(&keys.build_date, values.build_date);
    let build_date = document.upsert(&date_entry);
    StampOutcome {
        version,
        build_date,
    }
}
