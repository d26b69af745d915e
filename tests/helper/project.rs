//! Project directory test utilities

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use pipflow::manifest::ManifestStore;
use pipflow::ops::Operations;
use pipflow::rebuild::{BuildKind, BuildRunner, LaunchError, RebuildTrigger};
use pipflow::version::resolver::VersionResolver;

use super::MockRegistry;

/// Build runner that records builds instead of running them
#[derive(Default)]
pub struct RecordingRunner {
    builds: Mutex<Vec<(BuildKind, PathBuf)>>,
}

impl RecordingRunner {
    pub fn builds(&self) -> Vec<(BuildKind, PathBuf)> {
        self.builds.lock().unwrap().clone()
    }
}

impl BuildRunner for RecordingRunner {
    fn run(&self, kind: BuildKind, working_dir: &Path) -> Result<(), LaunchError> {
        self.builds
            .lock()
            .unwrap()
            .push((kind, working_dir.to_path_buf()));
        Ok(())
    }
}

/// A throwaway project directory with a requirements.txt
pub struct TestProject {
    pub dir: TempDir,
    pub registry: Arc<MockRegistry>,
    pub runner: Arc<RecordingRunner>,
}

impl TestProject {
    pub fn new(requirements: &str, registry: MockRegistry) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), requirements).unwrap();
        fs::create_dir(dir.path().join("backups")).unwrap();

        Self {
            dir,
            registry: Arc::new(registry),
            runner: Arc::new(RecordingRunner::default()),
        }
    }

    pub fn with_file(self, name: &str) -> Self {
        fs::write(self.dir.path().join(name), "").unwrap();
        self
    }

    pub fn operations(&self) -> Operations {
        Operations::new(
            ManifestStore::new(self.manifest_path()).with_backup_dir(self.backup_dir()),
            VersionResolver::new(self.registry.clone()),
            RebuildTrigger::new(self.dir.path(), self.runner.clone()),
        )
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("requirements.txt")
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.dir.path().join("backups")
    }

    pub fn requirements(&self) -> String {
        fs::read_to_string(self.manifest_path()).unwrap()
    }

    pub fn backups(&self) -> Vec<PathBuf> {
        fs::read_dir(self.backup_dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }
}
