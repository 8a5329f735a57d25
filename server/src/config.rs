//! Server configuration loaded from environment variables.

use serde::Deserialize;
use thiserror::Error;

use crate::telemetry::LogFormat;

/// A configuration value that loaded but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must not be empty")]
    EmptyDatabaseUrl,

    #[error("DATABASE_MAX_CONNECTIONS must be at least 1")]
    ZeroMaxConnections,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bind host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite connection URL, e.g. `sqlite://todos.db` or `sqlite::memory:`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Pool size. Ignored for in-memory databases, which use one connection.
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    /// `json` or `pretty`.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite://todos.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            database_max_connections: default_max_connections(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::ZeroMaxConnections);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Unknown values fall back to `Pretty`; see [`Config::unknown_log_format`].
    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.log_format).unwrap_or_default()
    }

    /// The raw `LOG_FORMAT` value when it names no known format.
    pub fn unknown_log_format(&self) -> Option<&str> {
        match LogFormat::parse(&self.log_format) {
            Some(_) => None,
            None => Some(&self.log_format),
        }
    }
}
