//! Console rendering of operation results

use std::fmt::Write;

use crate::ops::error::OperationError;
use crate::ops::outcome::Outcome;
use crate::rebuild::{BuildKind, Rebuild};
use crate::version::checker::{ErrorRecord, VersionChange};

/// Console text and process exit code of a finished operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conclusion {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: u8,
}

/// Decide what to print and how to exit.
///
/// Expected failures exit with 1, as does a scan that collected lookup
/// failures. Manifest I/O faults are handed back to the caller.
pub fn conclude(result: Result<Outcome, OperationError>) -> Result<Conclusion, OperationError> {
    match result {
        Ok(outcome) => Ok(Conclusion {
            stdout: render(&outcome),
            stderr: String::new(),
            exit_code: outcome.exit_code(),
        }),
        Err(e) if e.is_user_error() => Ok(Conclusion {
            stdout: String::new(),
            stderr: format!("{}\n", render_error(&e)),
            exit_code: 1,
        }),
        Err(e) => Err(e),
    }
}

/// Render the stdout text for a successful operation
pub fn render(outcome: &Outcome) -> String {
    let mut out = String::new();

    match outcome {
        Outcome::Added {
            package,
            version,
            rebuild,
        } => {
            let _ = writeln!(out, "{package}=={version} added");
            out.push_str(&render_rebuild(rebuild));
        }
        Outcome::Removed { package } => {
            let _ = writeln!(out, "{package} removed");
        }
        Outcome::Bumped { package, from, to } => {
            let _ = writeln!(out, "Bumped {package} from {from} to {to}");
        }
        Outcome::AlreadyCurrent { package, version } => {
            let _ = writeln!(out, "Package already current ({package}=={version})");
        }
        Outcome::UpgradedAll {
            bumped,
            errors,
            rebuild,
        } => {
            let _ = writeln!(out, "Bumped all packages");
            out.push_str(&render_changes(bumped, &["Package", "Previous", "Pinned"]));
            out.push_str(&render_rebuild(rebuild));
            out.push_str(&render_errors(errors));
        }
        Outcome::AllCurrent { errors } => {
            let _ = writeln!(out, "All packages current");
            out.push_str(&render_errors(errors));
        }
        Outcome::Viewed(report) => {
            if report.outdated.is_empty() {
                let _ = writeln!(out, "All packages current");
            } else {
                let _ = writeln!(out, "Outdated packages");
                out.push_str(&render_changes(
                    &report.outdated,
                    &["Package", "Current", "Latest"],
                ));
            }
            out.push_str(&render_errors(&report.errors));
        }
    }

    out
}

/// Render the stderr message for a failed operation
pub fn render_error(error: &OperationError) -> String {
    match error {
        OperationError::AlreadyPresent(package) => {
            format!("Package already exists in manifest: {package}")
        }
        OperationError::NotFound(package) => format!("Package not found: {package}"),
        OperationError::Lookup(failure) => {
            format!(
                "Could not resolve the latest version of {}: {}",
                failure.package, failure.source
            )
        }
        OperationError::Manifest(e) => e.to_string(),
    }
}

fn render_rebuild(rebuild: &Rebuild) -> String {
    match rebuild {
        Rebuild::Ran(BuildKind::Compose) => "Rebuilt compose service\n".to_string(),
        Rebuild::Ran(BuildKind::Dockerfile) => "Rebuilt from ./Dockerfile\n".to_string(),
        Rebuild::LaunchFailed { reason, .. } => format!("Rebuild skipped: {reason}\n"),
        Rebuild::NothingToBuild => "No Docker manifests to build from\n".to_string(),
    }
}

fn render_changes(changes: &[VersionChange], header: &[&str; 3]) -> String {
    let rows: Vec<[&str; 3]> = changes
        .iter()
        .map(|c| [c.package.as_str(), c.current.as_str(), c.latest.as_str()])
        .collect();
    render_table(header, &rows)
}

fn render_errors(errors: &[ErrorRecord]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let rows: Vec<[&str; 3]> = errors
        .iter()
        .map(|e| [e.package.as_str(), e.current.as_str(), e.detail.as_str()])
        .collect();
    format!(
        "\nPackages with errors\n{}",
        render_table(&["Package", "Current", "Error"], &rows)
    )
}

/// Left-aligned columns sized to their widest cell; the last column is not padded
fn render_table<const N: usize>(header: &[&str; N], rows: &[[&str; N]]) -> String {
    let mut widths = header.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(header).chain(rows) {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == N {
                line.push_str(cell);
            } else {
                let _ = write!(line, "{:<width$}  ", cell, width = widths[i]);
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
