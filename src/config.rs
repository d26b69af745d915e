use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Default package index (PyPI JSON API)
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

/// Default manifest file name, relative to the working directory
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "PIPFLOW_LOG";

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "pipflow.log";

const APP_DIR: &str = "pipflow";

/// pipflow configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the JSON package index
    pub index_url: String,
    /// Manifest file name, relative to the working directory
    pub manifest: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
        }
    }
}

impl Config {
    /// Load the user configuration, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load configuration from `path`.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is
    /// logged and also yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("Failed to read config {:?}: {}", path, e);
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring malformed config {:?}: {}", path, e);
            Self::default()
        })
    }
}

/// Returns the path to the config directory for pipflow.
/// Uses $XDG_CONFIG_HOME/pipflow if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/pipflow,
/// or ./pipflow if neither is available.
pub fn config_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the data directory for pipflow.
/// Uses $XDG_DATA_HOME/pipflow if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/pipflow,
/// or ./pipflow if neither is available.
pub fn data_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn app_dir_with_env(
    xdg_dir: Option<String>,
    home_dir: Option<PathBuf>,
    home_relative: &str,
) -> PathBuf {
    let base = xdg_dir
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_relative)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_DIR)
}
