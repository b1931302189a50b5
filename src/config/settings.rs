//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the settings file
pub const DEFAULT_CONFIG_PATH: &str = "config/server.yaml";

/// Prefix for environment overrides, e.g. `FINANCE_API__SERVER__PORT=8000`
pub const ENV_PREFIX: &str = "FINANCE_API";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Document store connection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_uri")]
    pub uri: String,
    #[serde(default = "default_database_name")]
    pub name: String,
    /// Reported to the server in the connection handshake
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

fn default_database_uri() -> String {
    "mongodb://localhost:27017/".to_string()
}

fn default_database_name() -> String {
    "expenseDB".to_string()
}

fn default_app_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load settings from the default file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load settings from a specific file; a missing file falls back to defaults
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let format = if path.extension().map_or(false, |ext| ext == "toml") {
            FileFormat::Toml
        } else {
            FileFormat::Yaml
        };

        let mut builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("database.uri", default_database_uri())?
            .set_default("database.name", default_database_name())?
            .set_default("database.app_name", default_app_name())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", "json")?;

        if path.exists() {
            builder = builder.add_source(File::from(path).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.database.uri.trim().is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Database URI cannot be empty".to_string(),
            )));
        }

        if self.database.name.trim().is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Database name cannot be empty".to_string(),
            )));
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            database: DatabaseConfig {
                uri: default_database_uri(),
                name: default_database_name(),
                app_name: default_app_name(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: LogFormat::default(),
            },
        }
    }
}
