//! Container image rebuild after a manifest change
//!
//! - [`detect`]: compose / Dockerfile detection
//! - [`runner`]: the [`BuildRunner`] seam and the process-backed runner

pub mod detect;
pub mod runner;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

pub use detect::{BuildKind, detect_build_kind};
pub use runner::{BuildRunner, LaunchError, ProcessRunner};

/// What a rebuild attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rebuild {
    /// The build ran (its exit status is not inspected)
    Ran(BuildKind),
    /// The build command could not be started
    LaunchFailed { kind: BuildKind, reason: String },
    /// No compose file or Dockerfile in the working directory
    NothingToBuild,
}

/// Detects the project's containerization style and runs its build
#[derive(Clone)]
pub struct RebuildTrigger {
    working_dir: PathBuf,
    runner: Arc<dyn BuildRunner>,
}

impl RebuildTrigger {
    pub fn new(working_dir: impl Into<PathBuf>, runner: Arc<dyn BuildRunner>) -> Self {
        Self {
            working_dir: working_dir.into(),
            runner,
        }
    }

    pub fn detect_and_build(&self) -> Rebuild {
        let Some(kind) = detect_build_kind(&self.working_dir) else {
            info!(
                "No Docker manifests in {}, skipping rebuild",
                self.working_dir.display()
            );
            return Rebuild::NothingToBuild;
        };

        info!(
            "Running `{}` in {}",
            kind.display_command(),
            self.working_dir.display()
        );

        match self.runner.run(kind, &self.working_dir) {
            Ok(()) => Rebuild::Ran(kind),
            Err(e) => {
                warn!("{}", e);
                Rebuild::LaunchFailed {
                    kind,
                    reason: e.to_string(),
                }
            }
        }
    }
}
