use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants::{DEFAULT_LIMIT, DEFAULT_QUERY};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Pipeline endpoint
    pub pipeline_base_url: String,
    pub limit: u32,
    pub query: String,

    // HTTP client
    /// `None` leaves the request unbounded.
    pub http_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = parse_env_u64("HTTP_TIMEOUT_SECS", 30)?;

        Ok(Self {
            pipeline_base_url: env_or_default("PIPELINE_BASE_URL", "http://localhost:8000"),
            limit: parse_env_u32("PIPELINE_LIMIT", DEFAULT_LIMIT)?,
            query: env_or_default("PIPELINE_QUERY", DEFAULT_QUERY),
            http_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::InvalidValue {
                name: "PIPELINE_LIMIT".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        match Url::parse(&self.pipeline_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::InvalidValue {
                    name: "PIPELINE_BASE_URL".to_string(),
                    message: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    name: "PIPELINE_BASE_URL".to_string(),
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str, limit: u32) -> Config {
        Config {
            pipeline_base_url: base.to_string(),
            limit,
            query: "news".to_string(),
            http_timeout: None,
        }
    }

    #[test]
    fn test_validate_accepts_http_base() {
        assert!(config("http://localhost:8000", 300).validate().is_ok());
        assert!(config("https://trends.example.com/api/", 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        assert!(config("http://localhost:8000", 0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        assert!(config("not a url", 300).validate().is_err());
        assert!(config("ftp://example.com", 300).validate().is_err());
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_env_u32("NONEXISTENT_VAR", 300).unwrap(), 300);
        assert_eq!(parse_env_u64("NONEXISTENT_VAR", 30).unwrap(), 30);
        assert_eq!(env_or_default("NONEXISTENT_VAR", "news"), "news");
    }
}
