//! Configuration loading

pub mod settings;

pub use settings::{DatabaseConfig, LogFormat, LoggingConfig, ServerConfig, Settings};
