//! Build command execution

#[cfg(test)]
use mockall::automock;

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::rebuild::detect::BuildKind;

#[derive(Debug, thiserror::Error)]
#[error("Failed to run `{command}`: {source}")]
pub struct LaunchError {
    pub command: String,
    #[source]
    pub source: std::io::Error,
}

/// Trait for running a container build
#[cfg_attr(test, automock)]
pub trait BuildRunner: Send + Sync {
    /// Run the build for `kind` in `working_dir` and wait for it.
    ///
    /// Only a failure to start the build is an error; the build's own
    /// exit status is not reported back.
    fn run(&self, kind: BuildKind, working_dir: &Path) -> Result<(), LaunchError>;
}

/// Runs builds as child processes sharing this process's stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl BuildRunner for ProcessRunner {
    fn run(&self, kind: BuildKind, working_dir: &Path) -> Result<(), LaunchError> {
        let status = Command::new(kind.program())
            .args(kind.args())
            .current_dir(working_dir)
            .status()
            .map_err(|source| LaunchError {
                command: kind.display_command(),
                source,
            })?;

        if status.success() {
            info!("`{}` finished", kind.display_command());
        } else {
            warn!("`{}` exited with {}", kind.display_command(), status);
        }

        Ok(())
    }
}
