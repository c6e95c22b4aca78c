// crates/ports/src/filesystem.rs
use std::path::Path;

use envstamp_shared_kernel::OutputResult;

/// Port for whole-file text access to the configuration file.
pub trait FileStore: Send + Sync {
    /// `Ok(None)` when the file does not exist; any other failure is an error.
    fn read_optional(&self, path: &Path) -> OutputResult<Option<String>>;

    /// Replace the file's content completely, creating it when missing.
    fn write(&self, path: &Path, contents: &str) -> OutputResult<()>;
}
