//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file holding listed properties
    pub properties_file: PathBuf,

    /// JSON file holding registered alerts
    pub alerts_file: PathBuf,

    /// JSON file holding users (read-only)
    pub users_file: PathBuf,

    /// Record accepted commands in the audit log
    pub audit_log: bool,

    /// Add a `date` field to audit records
    pub audit_log_date: bool,

    /// Notification gateway; messages are only logged when unset
    pub notification_gateway_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |name: &str, default: &str| {
            PathBuf::from(lookup(name).unwrap_or_else(|| default.to_string()))
        };

        let properties_file = path("PROPERTIES_FILE", "properties.json");
        let alerts_file = path("ALERTS_FILE", "alerts.json");
        let users_file = path("USERS_FILE", "users.json");

        let audit_log = parse_flag("AUDIT_LOG", lookup("AUDIT_LOG"))?;
        let audit_log_date = parse_flag("AUDIT_LOG_DATE", lookup("AUDIT_LOG_DATE"))?;

        let notification_gateway_url = lookup("NOTIFICATION_GATEWAY_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            properties_file,
            alerts_file,
            users_file,
            audit_log,
            audit_log_date,
            notification_gateway_url,
        })
    }
}

fn parse_flag(name: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue(name)),
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
