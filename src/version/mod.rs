//! Version layer for package version checking
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Registry  │────▶│  Resolver   │◀────│   Checker   │
//! │   (fetch)   │     │  (lookup)   │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │  Registries │                         │    Loose    │
//! │   (PyPI)    │                         │(version cmp)│
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching the latest version of a package
//! - [`registries`]: Concrete registry implementations (PyPI)
//! - [`resolver`]: Turns registry errors into per-package lookup failures
//! - [`checker`]: Outdated detection and whole-manifest scans
//! - [`loose`]: Lenient version ordering
//! - [`error`]: Error types for registry lookups

pub mod checker;
pub mod error;
pub mod loose;
pub mod registries;
pub mod registry;
pub mod resolver;
