use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A failed latest-version lookup for one package
#[derive(Debug, Error)]
#[error("Failed to look up {package}: {source}")]
pub struct LookupFailure {
    pub package: String,
    #[source]
    pub source: RegistryError,
}
