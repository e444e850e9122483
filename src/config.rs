use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

/// Version reported when no metadata or archive name yields one
pub const DEFAULT_VERSION: &str = "2.0.0";

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "ARTIFACT_VERSION_LOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Application configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Identity of the module bootstrapping the registry (e.g., "com.example.core.Version")
    pub identity: Option<String>,
    pub default_version: String,
    /// Treat a duplicate of the module's own identity as fatal
    pub fail_on_duplicate: bool,
    pub catalog: CatalogConfig,
    /// Feature name -> marker resource whose presence enables it
    pub features: IndexMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            identity: None,
            default_version: DEFAULT_VERSION.to_string(),
            fail_on_duplicate: false,
            catalog: CatalogConfig::default(),
            features: IndexMap::new(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Lookup-path configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Entries (directories or archives) of the own lookup path, in search order
    pub lookup_path: Vec<PathBuf>,
    /// Additional named lookup paths
    pub contexts: IndexMap<String, Vec<PathBuf>>,
    /// Named context that stands for the caller's loading context
    pub caller_context: Option<String>,
}

/// Returns the path to the data directory for artifact-version.
/// Uses $XDG_DATA_HOME/artifact-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/artifact-version,
/// or ./artifact-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Log file used when `--log-file` is given without a value
pub fn log_path() -> PathBuf {
    data_dir().join("artifact-version.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("artifact-version")
}
