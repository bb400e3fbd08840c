use crate::server::error::{config::ConfigError, Error};

/// Address the HTTP server binds to when `BIND_ADDR` is not set
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_addr: String,
}

impl Config {
    /// Reads the server configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables were present
    /// - `Err(Error::ConfigError)` - A required variable is missing or not valid unicode
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_addr: optional_var("BIND_ADDR")?.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name)?.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
