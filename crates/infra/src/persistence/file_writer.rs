use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically replace the contents of `path` with `data` via a temp file
    /// and rename.
    ///
    /// An existing symlink is followed so the rename lands on the real file,
    /// and the existing file's permissions are carried over to the new one.
    /// Best-effort fsync is attempted where available to reduce corruption on
    /// crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
        let target = Self::resolve_target(path.as_ref())?;
        let parent = match target.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
            Some(parent) => parent,
            None => return Err(io::Error::other("path has no parent")),
        };
        let file_name = target
            .file_name()
            .ok_or_else(|| io::Error::other("path has no file name"))?
            .to_string_lossy()
            .into_owned();
        let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());

        // Same directory as the target so the rename never crosses file systems.
        let prefix = format!(".{file_name}.");
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // New files get the usual 0666 & !umask instead of tempfile's 0600.
            builder.permissions(fs::Permissions::from_mode(0o666));
        }

        // The temp file is removed on drop if anything below fails.
        let mut tmp = builder.tempfile_in(parent)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        if let Some(permissions) = existing {
            tmp.as_file().set_permissions(permissions)?;
        }
        let _ = tmp.as_file().sync_all();
        tmp.persist(&target).map_err(|err| err.error)?;

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = fs::File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    /// The file a write to `path` should replace: the symlink target when
    /// `path` exists, `path` itself when it does not.
    fn resolve_target(path: &Path) -> io::Result<PathBuf> {
        match fs::canonicalize(path) {
            Ok(real) => Ok(real),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
            Err(err) => Err(err),
        }
    }
}
