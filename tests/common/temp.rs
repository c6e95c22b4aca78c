use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

/// Throwaway project directory holding a manifest and an optional `.env`.
#[derive(Debug)]
pub struct TempProject {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn with_manifest(version: &str) -> Self {
        let project = Self::new();
        let manifest = format!(
            "{{\n  \"name\": \"frontend\",\n  \"version\": \"{version}\"\n}}\n"
        );
        project.write_file("package.json", &manifest);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel))
            .unwrap_or_else(|e| {
                panic!(
                    "failed to read {rel} in {}: {e}",
                    self.dir.path().display()
                )
            })
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    /// `envstamp` running inside the project, isolated from the caller's
    /// environment and from any enclosing git repository.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_envstamp"));
        cmd.current_dir(self.dir.path())
            .env_remove("ENVSTAMP_REVISION")
            .env_remove("ENVSTAMP_BUILD_DATE")
            .env_remove("RUST_LOG")
            .env("GIT_CEILING_DIRECTORIES", self.dir.path());
        cmd
    }
}
