use std::env;
use std::time::Duration;

use crate::services::retry::RetryConfig;

const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TRANSPORT_RETRIES: u32 = 2;
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_LOG_FILE: &str = "homework.log";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be a positive integer, got {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_period_secs: u64,
    pub request_timeout_secs: u64,
    pub transport_retries: u32,
}

/// Log file path. Resolved on its own so logging is up before the
/// rest of the configuration is validated.
pub fn log_file_from_env() -> String {
    env::var("LOG_FILE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary key lookup.
    /// Blank values are treated the same as absent ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let practicum_token = required("PRACTICUM_TOKEN")?;
        let telegram_token = required("TELEGRAM_TOKEN")?;
        let telegram_chat_id = required("TELEGRAM_CHAT_ID")?;
        let endpoint = required("URL")?;

        let positive = |name: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(name).filter(|v| !v.trim().is_empty()) {
                None => Ok(default),
                Some(raw) => match raw.trim().parse::<u64>() {
                    Ok(value) if value > 0 => Ok(value),
                    _ => Err(ConfigError::Invalid { name, value: raw }),
                },
            }
        };

        let retry_period_secs = positive("RETRY_PERIOD", DEFAULT_RETRY_PERIOD_SECS)?;
        let request_timeout_secs = positive("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        // Zero extra attempts is a valid choice here, so this one is not `positive`.
        let transport_retries = match lookup("TRANSPORT_RETRIES").filter(|v| !v.trim().is_empty()) {
            None => DEFAULT_TRANSPORT_RETRIES,
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::Invalid {
                name: "TRANSPORT_RETRIES",
                value: raw.clone(),
            })?,
        };

        let telegram_api_url = lookup("TELEGRAM_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            telegram_api_url,
            retry_period_secs,
            request_timeout_secs,
            transport_retries,
        })
    }

    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.transport_retries + 1,
            timeout_secs: self.request_timeout_secs,
            ..RetryConfig::default()
        }
    }
}
