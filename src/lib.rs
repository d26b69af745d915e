//! pipflow: keep a pinned `requirements.txt` up to date
//!
//! - [`manifest`]: reading, backing up and writing the manifest
//! - [`version`]: package index lookups and lenient version comparison
//! - [`rebuild`]: container image rebuild after a change
//! - [`ops`]: the user-facing operations tying these together

pub mod config;
pub mod logging;
pub mod manifest;
pub mod ops;
pub mod rebuild;
pub mod version;
