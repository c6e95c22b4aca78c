// src/config.rs
use std::path::PathBuf;

use envstamp_domain::{EntryKey, StampKeys};
use envstamp_shared_kernel::{BuildDate, PresentationError, PresentationResult, Result, RevisionId};
use envstamp_usecase::{RevisionPolicy, StampRequest};

use crate::cli::Args;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Validated run configuration resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct StampConfig {
    pub manifest: PathBuf,
    pub repo: PathBuf,
    pub output: PathBuf,
    pub keys: StampKeys,
    pub revision: RevisionPolicy,
    pub build_date: Option<BuildDate>,
    pub dry_run: bool,
    pub format: OutputFormat,
}

impl StampConfig {
    #[must_use]
    pub fn request(&self) -> StampRequest {
        StampRequest {
            manifest: self.manifest.clone(),
            repo: self.repo.clone(),
            output: self.output.clone(),
            keys: self.keys.clone(),
            revision: self.revision.clone(),
            build_date: self.build_date,
            dry_run: self.dry_run,
        }
    }
}

impl TryFrom<Args> for StampConfig {
    type Error = envstamp_shared_kernel::StampError;

    fn try_from(args: Args) -> Result<Self> {
        let keys = StampKeys::new(
            parse_flag("--version-key", &args.version_key, EntryKey::parse)?,
            parse_flag("--date-key", &args.date_key, EntryKey::parse)?,
        )?;

        let revision = match (args.no_revision, args.revision.as_deref()) {
            (true, _) => RevisionPolicy::Disabled,
            (false, Some(raw)) => {
                RevisionPolicy::Fixed(parse_flag("--revision", raw, RevisionId::parse)?)
            }
            (false, None) => RevisionPolicy::Query,
        };

        let build_date = args
            .build_date
            .as_deref()
            .map(|raw| parse_flag("--build-date", raw, BuildDate::parse))
            .transpose()?;

        Ok(Self {
            manifest: args.manifest,
            repo: args.repo,
            output: args.output,
            keys,
            revision,
            build_date,
            dry_run: args.dry_run,
            format: args.format.into(),
        })
    }
}

fn parse_flag<T, E: std::fmt::Display>(
    flag: &str,
    raw: &str,
    parse: impl FnOnce(&str) -> std::result::Result<T, E>,
) -> PresentationResult<T> {
    parse(raw).map_err(|err| PresentationError::InvalidValue {
        flag: flag.to_string(),
        value: raw.to_string(),
        reason: err.to_string(),
    })
}
