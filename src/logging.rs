//! Tracing subscriber setup
//!
//! Logs go to a file in the data directory so they never mix with the
//! command's console output. `--verbose` mirrors them to stderr.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::{LOG_ENV, LOG_FILE_NAME, data_dir};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// Returns the appender guard, which must be held until exit so buffered
/// lines are flushed. Returns `None` when the log file cannot be set up;
/// logging is then limited to stderr (if verbose) or disabled.
pub fn init(verbose: bool) -> Option<WorkerGuard> {
    let filter = || {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(filter())
    });

    let (file_layer, guard) = match file_writer() {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // A subscriber may already be installed (e.g. in tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    guard
}

fn file_writer() -> Option<(NonBlocking, WorkerGuard)> {
    let appender = file_appender(&data_dir())?;
    Some(tracing_appender::non_blocking(appender))
}

/// Open `<dir>/pipflow.log` for appending, `None` if it cannot be created
fn file_appender(dir: &Path) -> Option<RollingFileAppender> {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("pipflow: cannot create log directory {:?}: {}", dir, e);
        return None;
    }

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .inspect_err(|e| {
            eprintln!(
                "pipflow: cannot open log file {:?}: {}",
                dir.join(LOG_FILE_NAME),
                e
            );
        })
        .ok()
}
