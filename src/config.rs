//! Runtime configuration read from the environment.

use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `data.json` and backups.
    pub data_path: PathBuf,
    /// Extra assets served under `/static`.
    pub static_dir: Option<PathBuf>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            static_dir: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup("NOTES_DATA_PATH")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("NOTES_DATA_PATH"))?;

        let mut config = Self::new(data_path);

        if let Some(host) = lookup("NOTES_HOST").filter(|v| !v.trim().is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("NOTES_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("NOTES_PORT is not a port: {}", port)))?;
        }
        config.static_dir = lookup("NOTES_STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn backups_dir(&self) -> PathBuf {
        self.data_path.join("backups")
    }
}
