//! Manifest operations
//!
//! Every operation is a single pass: load the manifest, mutate it in memory,
//! commit it sorted by name when something changed, and rebuild the container
//! image where the operation calls for it. Collaborators are injected through
//! [`Operations::new`].
//!
//! - [`outcome`]: what a successful operation did
//! - [`error`]: user-facing and I/O failures
//! - [`report`]: console rendering of outcomes

pub mod error;
pub mod outcome;
pub mod report;

use tracing::info;

use crate::manifest::{Manifest, ManifestStore, sort_by_name_case_insensitive};
use crate::rebuild::RebuildTrigger;
use crate::version::checker;
use crate::version::resolver::VersionResolver;

pub use error::OperationError;
pub use outcome::Outcome;

/// A user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add(String),
    Remove(String),
    Upgrade(String),
    UpgradeAll,
    ViewAll,
}

/// Runs operations against one manifest
pub struct Operations {
    store: ManifestStore,
    resolver: VersionResolver,
    trigger: RebuildTrigger,
}

impl Operations {
    pub fn new(store: ManifestStore, resolver: VersionResolver, trigger: RebuildTrigger) -> Self {
        Self {
            store,
            resolver,
            trigger,
        }
    }

    pub async fn run(&self, operation: &Operation) -> Result<Outcome, OperationError> {
        info!("Running {:?} on {}", operation, self.store.path().display());

        match operation {
            Operation::Add(package) => self.add(package).await,
            Operation::Remove(package) => self.remove(package),
            Operation::Upgrade(package) => self.upgrade(package).await,
            Operation::UpgradeAll => self.upgrade_all().await,
            Operation::ViewAll => self.view_all().await,
        }
    }

    /// Pin a new package at its latest version and rebuild
    pub async fn add(&self, package: &str) -> Result<Outcome, OperationError> {
        let mut manifest = self.load_for_update()?;
        if manifest.contains_key(package) {
            return Err(OperationError::AlreadyPresent(package.to_string()));
        }

        let version = self.resolver.latest_version(package).await?;
        manifest.insert(package.to_string(), version.clone());
        self.commit(&manifest)?;

        Ok(Outcome::Added {
            package: package.to_string(),
            version,
            rebuild: self.trigger.detect_and_build(),
        })
    }

    /// Drop a package from the manifest
    pub fn remove(&self, package: &str) -> Result<Outcome, OperationError> {
        let mut manifest = self.load_for_update()?;
        if manifest.shift_remove(package).is_none() {
            return Err(OperationError::NotFound(package.to_string()));
        }

        self.commit(&manifest)?;

        Ok(Outcome::Removed {
            package: package.to_string(),
        })
    }

    /// Re-pin one package to whatever the index reports as latest
    ///
    /// Any difference counts, so a yanked latest release can move the pin down.
    pub async fn upgrade(&self, package: &str) -> Result<Outcome, OperationError> {
        let mut manifest = self.load_for_update()?;
        let Some(current) = manifest.get(package).cloned() else {
            return Err(OperationError::NotFound(package.to_string()));
        };

        let latest = self.resolver.latest_version(package).await?;
        if latest == current {
            return Ok(Outcome::AlreadyCurrent {
                package: package.to_string(),
                version: current,
            });
        }

        manifest.insert(package.to_string(), latest.clone());
        self.commit(&manifest)?;

        Ok(Outcome::Bumped {
            package: package.to_string(),
            from: current,
            to: latest,
        })
    }

    /// Bump every outdated package, then rebuild if anything changed
    pub async fn upgrade_all(&self) -> Result<Outcome, OperationError> {
        let manifest = self.load_for_update()?;
        let (updated, report) = checker::diff_all(&manifest, &self.resolver).await;

        if report.outdated.is_empty() {
            return Ok(Outcome::AllCurrent {
                errors: report.errors,
            });
        }

        self.commit(&updated)?;

        Ok(Outcome::UpgradedAll {
            bumped: report.outdated,
            errors: report.errors,
            rebuild: self.trigger.detect_and_build(),
        })
    }

    /// List outdated packages without touching the manifest
    pub async fn view_all(&self) -> Result<Outcome, OperationError> {
        let manifest = self.store.load()?;
        let report = checker::scan(&manifest, &self.resolver).await;

        Ok(Outcome::Viewed(report))
    }

    fn load_for_update(&self) -> Result<Manifest, OperationError> {
        self.store.backup()?;
        Ok(self.store.load()?)
    }

    fn commit(&self, manifest: &Manifest) -> Result<(), OperationError> {
        Ok(self.store.commit(&sort_by_name_case_insensitive(manifest))?)
    }
}
