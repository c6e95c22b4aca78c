use std::path::PathBuf;

use envstamp_domain::{StampKeys, StampOutcome};
use envstamp_shared_kernel::{BuildDate, CompositeVersion, DeclaredVersion, RevisionId};
use serde::Serialize;

/// How the revision suffix is obtained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RevisionPolicy {
    /// Ask source control in the repository directory.
    #[default]
    Query,
    /// Use a revision supplied by the caller.
    Fixed(RevisionId),
    /// Never add a revision suffix.
    Disabled,
}

#[derive(Debug, Clone)]
pub struct StampRequest {
    pub manifest: PathBuf,
    pub repo: PathBuf,
    pub output: PathBuf,
    pub keys: StampKeys,
    pub revision: RevisionPolicy,
    /// Pinned date; the clock is not consulted when set.
    pub build_date: Option<BuildDate>,
    pub dry_run: bool,
}

impl StampRequest {
    pub fn new(
        manifest: impl Into<PathBuf>,
        repo: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            manifest: manifest.into(),
            repo: repo.into(),
            output: output.into(),
            keys: StampKeys::default(),
            revision: RevisionPolicy::default(),
            build_date: None,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StampResult {
    pub composite_version: CompositeVersion,
    pub declared_version: DeclaredVersion,
    pub revision: Option<RevisionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_warning: Option<String>,
    pub build_date: BuildDate,
    pub output: PathBuf,
    /// The output file did not exist before this run.
    pub created: bool,
    /// `false` for dry runs.
    pub written: bool,
    pub entries: StampOutcome,
    #[serde(skip)]
    pub document: String,
}
