use envstamp_domain::{ConfigDocument, StampValues, apply_stamp};
use envstamp_ports::{
    clock::Clock, command::CommandRunner, filesystem::FileStore, manifest::ManifestReader,
};
use envstamp_shared_kernel::{BuildDate, ErrorContext, Result, RevisionId};
use tracing::{debug, info};

use crate::{
    dto::{RevisionPolicy, StampRequest, StampResult},
    revision::query_revision,
};

/// Derives the build's version metadata and upserts it into the output file.
pub struct StampVersion<'a> {
    manifests: &'a dyn ManifestReader,
    files: &'a dyn FileStore,
    commands: &'a dyn CommandRunner,
    clock: &'a dyn Clock,
}

impl<'a> StampVersion<'a> {
    pub fn new(
        manifests: &'a dyn ManifestReader,
        files: &'a dyn FileStore,
        commands: &'a dyn CommandRunner,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            manifests,
            files,
            commands,
            clock,
        }
    }

    /// Manifest and output errors abort before anything is written; a failed
    /// revision lookup only downgrades the version string.
    pub fn run(&self, request: &StampRequest) -> Result<StampResult> {
        let declared = self.manifests.declared_version(&request.manifest)?;
        debug!(manifest = %request.manifest.display(), version = %declared, "manifest loaded");

        let (revision, revision_warning) = self.resolve_revision(request);

        let build_date = request
            .build_date
            .unwrap_or_else(|| BuildDate::from_utc(self.clock.now_utc()));
        let values = StampValues::compute(&declared, revision.as_ref(), build_date);
        debug!(version = %values.version, build_date = %values.build_date, "values computed");

        let existing = self.files.read_optional(&request.output)?;
        let created = existing.is_none();
        let mut document = existing
            .as_deref()
            .map(ConfigDocument::parse)
            .unwrap_or_default();
        debug!(
            output = %request.output.display(),
            lines = document.lines().len(),
            created,
            "document loaded"
        );

        let entries = apply_stamp(&mut document, &request.keys, &values);
        let rendered = document.render();

        if request.dry_run {
            info!(output = %request.output.display(), "dry run, leaving file untouched");
        } else {
            self.files
                .write(&request.output, &rendered)
                .with_context(|| format!("stamping {}", request.output.display()))?;
            info!(output = %request.output.display(), "configuration written");
        }

        Ok(StampResult {
            composite_version: values.version,
            declared_version: declared,
            revision,
            revision_warning,
            build_date: values.build_date,
            output: request.output.clone(),
            created,
            written: !request.dry_run,
            entries,
            document: rendered,
        })
    }

    fn resolve_revision(&self, request: &StampRequest) -> (Option<RevisionId>, Option<String>) {
        match &request.revision {
            RevisionPolicy::Disabled => (None, None),
            RevisionPolicy::Fixed(rev) => (Some(rev.clone()), None),
            RevisionPolicy::Query => match query_revision(self.commands, &request.repo) {
                Ok(rev) => {
                    debug!(revision = %rev, "revision resolved");
                    (Some(rev), None)
                }
                Err(err) => {
                    debug!(repo = %request.repo.display(), error = %err, "revision lookup failed");
                    (None, Some(err.to_string()))
                }
            },
        }
    }
}
