//! Configuration file handling.
//!
//! This module provides loading and parsing of `.prisma_entities.json`
//! configuration files. Every field is optional; command-line flags take
//! precedence over anything read here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::driver::PrismaDriver;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".prisma_entities.json";

/// Log level used when neither the config file nor the CLI sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {message}")]
    ReadFailed { path: String, message: String },

    #[error("Invalid JSON in config '{path}': {message}")]
    InvalidJson { path: String, message: String },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Database identifier stamped onto entities (defaults to the input path)
    pub database: Option<String>,
    /// Schema identifier stamped onto entities
    pub schema: Option<String>,
    /// Tracing filter directive, e.g. `info` or `prisma_entities=debug`
    pub log_level: Option<String>,
}

impl ConfigFile {
    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load `path` if given, otherwise `.prisma_entities.json` from the
    /// current directory. A missing default file yields the defaults; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn schema_or_default(&self) -> &str {
        self.schema.as_deref().unwrap_or(PrismaDriver::STANDARD_SCHEMA)
    }

    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
