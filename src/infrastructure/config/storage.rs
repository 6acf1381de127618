//! Configuration file discovery and loading.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No per-user configuration directory exists on this platform.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Neither the environment, the CLI nor the file set a base URL.
    #[error("no image service base URL configured (set PUZZLE_API_BASE_URL or --api-base-url)")]
    MissingBaseUrl,
    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The default config file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Defaults could not be rendered as TOML.
    #[error("toml serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Location of the TOML config file.
///
/// A missing file is created with defaults; an unparsable one is left alone and
/// defaults are used for the session.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Uses `path_override` when given, else `config.toml` in the per-user
    /// configuration directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigDirNotFound`] if no override is given and the
    /// platform has no configuration directory.
    pub fn locate(path_override: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path_override {
            Some(path) => path.to_path_buf(),
            None => ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
                .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
                .ok_or(ConfigError::ConfigDirNotFound)?,
        };
        Ok(Self { path })
    }

    /// Reads the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if it is
    /// missing and the defaults cannot be written.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Config file not found, writing defaults");
            let defaults = AppConfig::default();
            self.write_atomic(&toml::to_string_pretty(&defaults)?)?;
            return Ok(defaults);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                debug!(path = %self.path.display(), "Config loaded");
                Ok(config)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unparsable config file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    fn write_atomic(&self, content: &str) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(write_err)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
        temp_file.write_all(content.as_bytes()).map_err(write_err)?;
        temp_file.persist(&self.path).map_err(|e| write_err(e.error))?;

        Ok(())
    }
}
