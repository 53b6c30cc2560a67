// Configuration service
// TOML configuration for the host adapter, resolved from the platform
// config directory

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Event store of the reference deployment, used when no config overrides it.
pub const DEFAULT_STORE_URL: &str =
    "https://agenda-areia-ana-default-rtdb.firebaseio.com/eventos.json";

const DEFAULT_YEAR_WINDOW: u32 = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// URL of the remote JSON event collection.
    #[serde(default = "default_store_url")]
    pub event_store_url: String,
    /// How many years around the active one the host year selector offers.
    #[serde(default = "default_year_window")]
    pub year_window: u32,
}

fn default_store_url() -> String {
    DEFAULT_STORE_URL.to_string()
}

fn default_year_window() -> u32 {
    DEFAULT_YEAR_WINDOW
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            event_store_url: default_store_url(),
            year_window: default_year_window(),
        }
    }
}

/// Default config file location in the platform config directory.
pub fn config_path() -> Option<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("agenda-calendar").join("config.toml"))
}

impl AppConfig {
    /// Read and parse a config file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective configuration. A missing or malformed file
    /// degrades to the built-in defaults with a diagnostic; the calendar
    /// must render regardless.
    pub fn load(explicit_path: Option<&Path>) -> Self {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => match config_path() {
                Some(path) => path,
                None => return Self::default(),
            },
        };

        if !path.exists() {
            log::debug!("No config file at {}; using defaults", path.display());
            return Self::default();
        }

        match Self::read(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring config: {}", err);
                Self::default()
            }
        }
    }
}
