// crates/infra/src/filesystem.rs
use std::path::Path;

use envstamp_ports::filesystem::FileStore;
use envstamp_shared_kernel::{OutputError, OutputResult};
use tracing::trace;

use crate::persistence::{FileReader, FileWriter};

/// [`FileStore`] backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn read_optional(&self, path: &Path) -> OutputResult<Option<String>> {
        let text = FileReader::read_optional(path).map_err(|source| OutputError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        trace!(
            path = %path.display(),
            exists = text.is_some(),
            "read configuration"
        );
        Ok(text)
    }

    fn write(&self, path: &Path, contents: &str) -> OutputResult<()> {
        FileWriter::atomic_write(path, contents.as_bytes()).map_err(|source| {
            OutputError::ConfigWrite {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}
