//! Server Configuration
//!
//! Host, port, database location, CORS origins and log level. Every value has
//! a default and can be overridden through `GRADEBOOK_*` environment variables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::sqlite::connection::DATABASE_URL;

pub const ENV_HOST: &str = "GRADEBOOK_HOST";
pub const ENV_PORT: &str = "GRADEBOOK_PORT";
pub const ENV_DATABASE_URL: &str = "GRADEBOOK_DATABASE_URL";
pub const ENV_CORS_ORIGINS: &str = "GRADEBOOK_CORS_ORIGINS";
pub const ENV_LOG_LEVEL: &str = "GRADEBOOK_LOG_LEVEL";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid port {0:?}: expected a number between 0 and 65535")]
    InvalidPort(String),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLx connection URL (default: "sqlite:gradebook.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// CORS allowed origins (default: ["http://localhost:8080"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Fallback tracing filter when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    DATABASE_URL.to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:8080".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            cors_origins: default_cors_origins(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            self.database_url = url;
        }
        if let Some(origins) = lookup(ENV_CORS_ORIGINS) {
            self.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        Ok(self)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
