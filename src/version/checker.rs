//! Version comparison across a whole manifest

use tracing::{debug, info};

use crate::manifest::Manifest;
use crate::version::loose;
use crate::version::resolver::VersionResolver;

/// A package whose lookup failed during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub package: String,
    /// Version pinned in the manifest, left unchanged
    pub current: String,
    /// Human readable reason the lookup failed
    pub detail: String,
}

/// A package whose pinned version is behind the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub package: String,
    pub current: String,
    pub latest: String,
}

/// Result of scanning every package in a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Outdated packages in manifest order
    pub outdated: Vec<VersionChange>,
    /// Lookup failures in manifest order
    pub errors: Vec<ErrorRecord>,
}

/// Whether `current` should be replaced by `latest`
///
/// Unparseable versions are never outdated.
pub fn is_outdated(current: &str, latest: &str) -> bool {
    loose::is_outdated(current, latest)
}

/// Resolve every package in manifest order, one lookup at a time.
pub async fn scan(manifest: &Manifest, resolver: &VersionResolver) -> ScanReport {
    let mut report = ScanReport::default();

    for (package, current) in manifest {
        match resolver.latest_version(package).await {
            Ok(latest) if is_outdated(current, &latest) => {
                debug!("{} is outdated: {} < {}", package, current, latest);
                report.outdated.push(VersionChange {
                    package: package.clone(),
                    current: current.clone(),
                    latest,
                });
            }
            Ok(_) => {}
            Err(failure) => report.errors.push(ErrorRecord {
                package: failure.package,
                current: current.clone(),
                detail: failure.source.to_string(),
            }),
        }
    }

    info!(
        "Scanned {} packages: {} outdated, {} errors",
        manifest.len(),
        report.outdated.len(),
        report.errors.len()
    );

    report
}

/// Bump every outdated package to its latest version.
///
/// Returns the updated manifest (same keys, same order) together with the
/// scan that produced it. Packages whose lookup failed keep their version.
pub async fn diff_all(manifest: &Manifest, resolver: &VersionResolver) -> (Manifest, ScanReport) {
    let report = scan(manifest, resolver).await;

    let mut updated = manifest.clone();
    for change in &report.outdated {
        if let Some(version) = updated.get_mut(&change.package) {
            *version = change.latest.clone();
        }
    }

    (updated, report)
}
