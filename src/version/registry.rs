//! Registry trait for fetching the latest published version of a package

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for querying a package index
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the version the index reports as latest
    ///
    /// # Arguments
    /// * `package_name` - The name of the package as written in the manifest
    ///
    /// # Returns
    /// * `Ok(String)` - The latest published version
    /// * `Err(RegistryError)` - If the request fails or the response is unusable
    async fn fetch_latest_version(&self, package_name: &str) -> Result<String, RegistryError>;
}
