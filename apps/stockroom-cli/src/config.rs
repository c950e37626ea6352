//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use stockroom_db::DbConfig;

pub const ENV_DATABASE_PATH: &str = "STOCKROOM_DATABASE_PATH";
pub const ENV_MAX_CONNECTIONS: &str = "STOCKROOM_MAX_CONNECTIONS";
pub const ENV_VALIDATE_INPUT: &str = "STOCKROOM_VALIDATE_INPUT";
pub const ENV_LOG: &str = "STOCKROOM_LOG";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size upper bound
    pub max_connections: u32,

    /// Refuse empty names and negative prices on create
    pub validate_input: bool,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CliConfig {
            database_path: lookup(ENV_DATABASE_PATH)
                .unwrap_or_else(|| "./stockroom.db".to_string())
                .into(),

            max_connections: lookup(ENV_MAX_CONNECTIONS)
                .unwrap_or_else(|| "5".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_MAX_CONNECTIONS.to_string()))?,

            validate_input: match lookup(ENV_VALIDATE_INPUT) {
                None => false,
                Some(raw) => parse_bool(&raw)
                    .ok_or_else(|| ConfigError::InvalidValue(ENV_VALIDATE_INPUT.to_string()))?,
            },

            log_filter: lookup(ENV_LOG).unwrap_or_else(|| "info".to_string()),
        };

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue(ENV_MAX_CONNECTIONS.to_string()));
        }

        if config.database_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired(ENV_DATABASE_PATH.to_string()));
        }

        Ok(config)
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.max_connections)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
