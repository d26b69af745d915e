//! Registry implementations for fetching package versions

pub mod pypi;

pub use pypi::PypiRegistry;
