//! Configuration file handling.
//!
//! This module provides loading and parsing of `.mytools.json` configuration files.
//! The file is looked up in the current directory, then in the home directory.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::db::{ConnectionParams, ConnectionPolicy, DatabaseConfig, DbError};

pub const CONFIG_FILE_NAME: &str = ".mytools.json";
pub const DEFAULT_LOG_FILE: &str = "mytools.log";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Database configuration (optional; date and log commands don't need it)
    #[serde(default)]
    pub database: Option<DatabaseConfigFile>,

    /// Log file configuration. Database failures are also written here,
    /// but only when the section is present.
    #[serde(default)]
    pub log: Option<LogConfigFile>,
}

/// Database section: either a `url` or the individual fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfigFile {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Keep one connection open between statements instead of reconnecting
    #[serde(default)]
    pub reuse_connection: bool,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfigFile {
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

impl Default for LogConfigFile {
    fn default() -> Self {
        Self {
            path: default_log_path(),
        }
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl ConfigFile {
    /// Log file for the `log` and `show-log` commands.
    pub fn log_path(&self) -> PathBuf {
        self.log
            .as_ref()
            .map_or_else(default_log_path, |log| log.path.clone())
    }

    /// Log file for database failure diagnostics, if one is configured.
    pub fn diagnostics_log(&self) -> Option<&Path> {
        self.log.as_ref().map(|log| log.path.as_path())
    }

    /// Find and load the configuration file.
    ///
    /// Search order: explicit path, `./.mytools.json`, `~/.mytools.json`.
    /// Returns `Ok(None)` when no file exists and none was requested.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit path was given but doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid
    pub fn load(explicit: Option<&Path>) -> Result<Option<Self>, Box<dyn Error>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(format!("Configuration file not found: {}", path.display()).into());
            }
            return Self::load_from(path).map(Some);
        }

        match Self::find() {
            Some(path) => Self::load_from(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path).map_err(|e| {
            Box::new(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            )) as Box<dyn Error>
        })?;

        let config: ConfigFile = serde_json::from_str(&content).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid JSON in {}: {}", path.display(), e),
            )) as Box<dyn Error>
        })?;

        Ok(config)
    }

    fn find() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        let global = home::home_dir()?.join(CONFIG_FILE_NAME);
        global.exists().then_some(global)
    }
}

impl DatabaseConfigFile {
    /// Convert this configuration to a DatabaseConfig.
    pub fn to_database_config(&self) -> Result<DatabaseConfig, DbError> {
        let params = match &self.url {
            Some(url) => {
                let mut params = ConnectionParams::from_url(url)?;
                if self.port.is_some() {
                    params.port = self.port;
                }
                params
            }
            None => {
                let required = |value: &Option<String>, name: &str| {
                    value.clone().ok_or_else(|| DbError::ConfigFailed {
                        message: format!(
                            "database.{} is required when database.url is not set",
                            name
                        ),
                    })
                };
                ConnectionParams {
                    server: required(&self.server, "server")?,
                    port: self.port,
                    database: required(&self.database, "database")?,
                    user: required(&self.user, "user")?,
                    password: self.password.clone().unwrap_or_default(),
                }
            }
        };

        let mut config = DatabaseConfig::new(params);
        if self.reuse_connection {
            config = config.with_policy(ConnectionPolicy::Reuse);
        }
        if let Some(secs) = self.connect_timeout_secs {
            config = config.with_connect_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
