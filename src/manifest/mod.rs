//! Pinned requirements manifest
//! - types.rs: `Manifest` ordered mapping and ordering helpers
//! - store.rs: reading, backing up and writing the manifest file
//! - error.rs: I/O error type for manifest operations

pub mod error;
pub mod store;
pub mod types;

pub use error::ManifestError;
pub use store::ManifestStore;
pub use types::{Manifest, parse, sort_by_name_case_insensitive};
