use std::path::Path;

use envstamp_ports::command::{CommandRunner, CommandSpec};
use envstamp_shared_kernel::{DependencyError, DependencyResult, RevisionId};

/// `git rev-parse --short HEAD` run inside `repo`.
#[must_use]
pub fn revision_query(repo: &Path) -> CommandSpec {
    CommandSpec::new("git", ["rev-parse", "--short", "HEAD"], repo)
}

/// Short revision of `HEAD`. Every failure mode is a [`DependencyError`] so the
/// caller can degrade to a revision-less version.
pub fn query_revision(
    runner: &dyn CommandRunner,
    repo: &Path,
) -> DependencyResult<RevisionId> {
    let spec = revision_query(repo);
    let output = runner.run(&spec)?;

    if !output.success() {
        let status = output.code.map_or_else(
            || "a signal".to_string(),
            |code| format!("exit code {code}"),
        );
        return Err(DependencyError::CommandFailed {
            command: spec.display_line(),
            status,
            stderr: String::from_utf8_lossy(&output.stderr)
                .trim()
                .to_string(),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| DependencyError::UnusableOutput {
        command: spec.display_line(),
        details: "stdout is not valid UTF-8".to_string(),
    })?;

    RevisionId::parse(&stdout).map_err(|err| DependencyError::UnusableOutput {
        command: spec.display_line(),
        details: err.to_string(),
    })
}
