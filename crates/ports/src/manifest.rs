// crates/ports/src/manifest.rs
use std::path::Path;

use envstamp_shared_kernel::{DeclaredVersion, InputResult};

/// Port for reading the declared version out of a project manifest.
pub trait ManifestReader: Send + Sync {
    fn declared_version(&self, path: &Path) -> InputResult<DeclaredVersion>;
}
