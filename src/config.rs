use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::telemetry::LogFormat;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerSettings,
    #[serde(default)]
    #[validate(nested)]
    pub basics: BasicsSettings,
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(range(min = 1, max = 512))]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

/// Payloads of the fixed demo endpoints
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BasicsSettings {
    #[serde(default = "default_welcome_message")]
    #[validate(length(min = 1))]
    pub welcome_message: String,
    #[serde(default = "default_hello_message")]
    #[validate(length(min = 1))]
    pub hello_message: String,
}

impl Default for BasicsSettings {
    fn default() -> Self {
        Self {
            welcome_message: default_welcome_message(),
            hello_message: default_hello_message(),
        }
    }
}

fn default_welcome_message() -> String { "Welcome to the Backend Basics API!".to_string() }
fn default_hello_message() -> String { "Hello, Express Setup!".to_string() }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    #[validate(custom(function = "validate_log_format"))]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    match LogFormat::from_setting(format) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("unknown_log_format")),
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with WEATHER_RULES__)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., WEATHER_RULES__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        Self::finish(settings)
    }

    fn finish(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("WEATHER_RULES")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
