//! Registry test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use pipflow::version::error::RegistryError;
use pipflow::version::registry::Registry;

/// In-memory registry that records every lookup
#[derive(Default)]
pub struct MockRegistry {
    latest: HashMap<String, String>,
    lookups: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest(mut self, package: &str, version: &str) -> Self {
        self.latest.insert(package.to_string(), version.to_string());
        self
    }

    /// Package names looked up so far, in order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_latest_version(&self, package_name: &str) -> Result<String, RegistryError> {
        self.lookups.lock().unwrap().push(package_name.to_string());
        match self.latest.get(package_name) {
            Some(version) => Ok(version.clone()),
            None => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }
}
