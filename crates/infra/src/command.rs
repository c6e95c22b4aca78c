// crates/infra/src/command.rs
use std::process::{Command, Stdio};

use envstamp_ports::command::{CommandOutput, CommandRunner, CommandSpec};
use envstamp_shared_kernel::{DependencyError, DependencyResult};
use tracing::debug;

/// Runs programs with `std::process`, stdin closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> DependencyResult<CommandOutput> {
        debug!(
            command = %spec.display_line(),
            cwd = %spec.current_dir.display(),
            "running"
        );
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.current_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DependencyError::CommandSpawn {
                program: spec.program.clone(),
                source,
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
