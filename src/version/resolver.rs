//! Latest version resolver
//!
//! Wraps a [`Registry`] so that every failure is turned into a
//! [`LookupFailure`] value the caller can record and move past.

use std::sync::Arc;

use tracing::warn;

use crate::version::error::LookupFailure;
use crate::version::registry::Registry;

/// Resolves the latest published version of a package
#[derive(Clone)]
pub struct VersionResolver {
    registry: Arc<dyn Registry>,
}

impl VersionResolver {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    /// Issue a single lookup for `package_name`.
    ///
    /// No retries: a failure means "unknown" for this run.
    pub async fn latest_version(&self, package_name: &str) -> Result<String, LookupFailure> {
        self.registry
            .fetch_latest_version(package_name)
            .await
            .map_err(|source| {
                warn!("Lookup for {} failed: {}", package_name, source);
                LookupFailure {
                    package: package_name.to_string(),
                    source,
                }
            })
    }
}
