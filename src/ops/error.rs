use crate::manifest::ManifestError;
use crate::version::error::LookupFailure;

/// Error type for operations
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    /// `add` of a package the manifest already pins
    #[error("Package already exists in manifest: {0}")]
    AlreadyPresent(String),

    /// `remove` or `upgrade` of a package the manifest does not pin
    #[error("Package not found: {0}")]
    NotFound(String),

    /// The latest version of the target package could not be resolved
    #[error(transparent)]
    Lookup(#[from] LookupFailure),

    /// The manifest file could not be read, backed up or written
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

impl OperationError {
    /// Whether this is an expected, user-facing failure rather than an I/O fault
    pub fn is_user_error(&self) -> bool {
        !matches!(self, OperationError::Manifest(_))
    }
}
