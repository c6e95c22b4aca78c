// src/bootstrap.rs
use anyhow::Result;
use envstamp_infra::{LocalFileStore, StructuredManifestReader, SystemClock, SystemCommandRunner};
use envstamp_usecase::StampVersion;
use tracing::debug;

use crate::{config::StampConfig, presentation};

/// Wire the production adapters into the use case and report the outcome.
pub fn run(config: &StampConfig) -> Result<()> {
    let manifests = StructuredManifestReader;
    let files = LocalFileStore;
    let commands = SystemCommandRunner;
    let clock = SystemClock;
    let usecase = StampVersion::new(&manifests, &files, &commands, &clock);
    debug!(
        manifest = %config.manifest.display(),
        output = %config.output.display(),
        dry_run = config.dry_run,
        "configuration resolved"
    );

    let result = usecase.run(&config.request())?;
    presentation::print_result(&result, config.format)?;
    Ok(())
}
