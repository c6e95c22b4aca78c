// crates/ports/src/command.rs
use std::path::{Path, PathBuf};

use envstamp_shared_kernel::DependencyResult;

/// A program invocation with an explicit working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I, current_dir: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: current_dir.to_path_buf(),
        }
    }

    /// `program arg1 arg2`, for messages.
    #[must_use]
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Port for running external programs synchronously.
pub trait CommandRunner: Send + Sync {
    /// Fails only when the process cannot be started; a non-zero exit is
    /// reported through [`CommandOutput::code`].
    fn run(&self, spec: &CommandSpec) -> DependencyResult<CommandOutput>;
}
