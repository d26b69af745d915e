//! PyPI registry client for fetching the latest version of Python packages

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::DEFAULT_INDEX_URL;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// PyPI registry client
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl Default for PypiRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_URL.to_string())
    }
}

impl PypiRegistry {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    info: PypiInfo,
}

/// Package information from PyPI
#[derive(Debug, Deserialize)]
struct PypiInfo {
    /// Latest version (according to PyPI)
    version: String,
}

#[async_trait]
impl Registry for PypiRegistry {
    async fn fetch_latest_version(&self, package_name: &str) -> Result<String, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !response.status().is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "PyPI API returned status {}",
                response.status()
            )));
        }

        let pypi_response: PypiResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        let version = pypi_response.info.version.trim();
        if version.is_empty() {
            return Err(RegistryError::InvalidResponse(format!(
                "PyPI reported an empty version for {}",
                package_name
            )));
        }

        debug!("Latest version of {} is {}", package_name, version);

        Ok(version.to_string())
    }
}
