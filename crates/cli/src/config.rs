//! Environment-driven configuration.

use core::fmt::Display;
use core::str::FromStr;
use std::env;

use thiserror::Error;

use stockledger_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use stockledger_observability::{LogConfig, LogFormat};

pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKLEDGER_LOW_STOCK_THRESHOLD";
pub const LOG_FORMAT_VAR: &str = "STOCKLEDGER_LOG_FORMAT";
pub const LOG_LEVEL_VAR: &str = "STOCKLEDGER_LOG_LEVEL";

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load and parse environment variable, falling back to `default`
/// when unset
pub fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Stock level below which a product is flagged.
    pub low_stock_threshold: u32,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            log: LogConfig::default(),
        }
    }
}

impl FromEnv for AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            low_stock_threshold: env_parse_or(LOW_STOCK_THRESHOLD_VAR, defaults.low_stock_threshold)?,
            log: LogConfig {
                level: env_or_default(LOG_LEVEL_VAR, &defaults.log.level),
                format: env_parse_or::<LogFormat>(LOG_FORMAT_VAR, defaults.log.format)?,
            },
        })
    }
}
