//! Manifest file storage

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use crate::manifest::error::ManifestError;
use crate::manifest::types::{self, Manifest};

/// Reads and writes one manifest file
///
/// The file is owned by the running command for its whole duration; there is
/// no locking, so concurrent writers race and the last write wins.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
    backup_dir: PathBuf,
}

impl ManifestStore {
    /// Create a store for `path`, backing up into the system temp directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup_dir: std::env::temp_dir(),
        }
    }

    /// Put backups into `dir` instead of the system temp directory
    pub fn with_backup_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backup_dir = dir.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the manifest fresh from disk
    pub fn load(&self) -> Result<Manifest, ManifestError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ManifestError::Read {
            path: self.path.clone(),
            source,
        })?;

        let manifest = types::parse(&content);
        debug!(
            "Loaded {} packages from {}",
            manifest.len(),
            self.path.display()
        );

        Ok(manifest)
    }

    /// Copy the manifest byte-for-byte into a new uniquely named file
    ///
    /// The backup is left in place for manual recovery.
    pub fn backup(&self) -> Result<PathBuf, ManifestError> {
        let to_error = |source: io::Error| ManifestError::Backup {
            path: self.path.clone(),
            source,
        };

        let mut original = File::open(&self.path).map_err(|source| ManifestError::Read {
            path: self.path.clone(),
            source,
        })?;

        let prefix = format!("pipflow-{}-", Local::now().format("%Y%m%dT%H%M%S"));
        let mut backup = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".txt")
            .tempfile_in(&self.backup_dir)
            .map_err(to_error)?;

        io::copy(&mut original, backup.as_file_mut()).map_err(to_error)?;

        let (_, backup_path) = backup.keep().map_err(|e| to_error(e.error))?;
        info!(
            "Backed up {} to {}",
            self.path.display(),
            backup_path.display()
        );

        Ok(backup_path)
    }

    /// Overwrite the file with `manifest` in its iteration order
    ///
    /// Comments and unparseable lines from the previous content are dropped.
    pub fn commit(&self, manifest: &Manifest) -> Result<(), ManifestError> {
        fs::write(&self.path, types::render(manifest)).map_err(|source| ManifestError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Wrote {} packages to {}",
            manifest.len(),
            self.path.display()
        );

        Ok(())
    }
}
