//! Results of a successful operation

use crate::rebuild::Rebuild;
use crate::version::checker::{ErrorRecord, ScanReport, VersionChange};

/// What an operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added {
        package: String,
        version: String,
        rebuild: Rebuild,
    },
    Removed {
        package: String,
    },
    Bumped {
        package: String,
        from: String,
        to: String,
    },
    AlreadyCurrent {
        package: String,
        version: String,
    },
    /// `upgrade-all` committed at least one bump
    UpgradedAll {
        bumped: Vec<VersionChange>,
        errors: Vec<ErrorRecord>,
        rebuild: Rebuild,
    },
    /// `upgrade-all` found nothing to bump
    AllCurrent {
        errors: Vec<ErrorRecord>,
    },
    /// `view-all` scan result
    Viewed(ScanReport),
}

impl Outcome {
    /// Lookup failures collected during a scan
    pub fn errors(&self) -> &[ErrorRecord] {
        match self {
            Outcome::UpgradedAll { errors, .. } | Outcome::AllCurrent { errors } => errors,
            Outcome::Viewed(report) => &report.errors,
            _ => &[],
        }
    }

    /// Whether the manifest file was rewritten
    pub fn committed(&self) -> bool {
        matches!(
            self,
            Outcome::Added { .. }
                | Outcome::Removed { .. }
                | Outcome::Bumped { .. }
                | Outcome::UpgradedAll { .. }
        )
    }

    pub fn rebuild(&self) -> Option<&Rebuild> {
        match self {
            Outcome::Added { rebuild, .. } | Outcome::UpgradedAll { rebuild, .. } => Some(rebuild),
            _ => None,
        }
    }

    /// Process exit code: 1 when lookup failures were collected
    pub fn exit_code(&self) -> u8 {
        if self.errors().is_empty() { 0 } else { 1 }
    }
}
