//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on use.

use debate_application::{DebateParams, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("workers.{0} is not a valid http(s) URL: {1}")]
    InvalidWorkerUrl(&'static str, String),

    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("workers.request_timeout_seconds cannot be 0")]
    InvalidRequestTimeout,

    #[error("debate.retry.max_attempts cannot be 0")]
    InvalidMaxAttempts,

    #[error("debate.retry.initial_backoff_ms cannot exceed max_backoff_ms")]
    InvalidBackoff,
}

/// Raw HTTP server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Raw generation worker configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkersConfig {
    /// Base URL of the supporting-stance worker
    pub supporting_url: String,
    /// Base URL of the opposing-stance worker
    pub opposing_url: String,
    /// Per-request HTTP timeout; generation on local models is slow
    pub request_timeout_seconds: u64,
}

impl Default for FileWorkersConfig {
    fn default() -> Self {
        Self {
            supporting_url: "http://agent_pro:5000".to_string(),
            opposing_url: "http://agent_con:5000".to_string(),
            request_timeout_seconds: 300,
        }
    }
}

impl FileWorkersConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// Raw retry configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Attempts per worker call, including the first
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff_ms: 500,
            max_backoff_ms: 8000,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_attempts(self.max_attempts)
            .with_backoff(
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            )
    }
}

/// Raw debate behavior configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Overall session deadline in seconds (`0` or absent = none)
    pub session_timeout_seconds: Option<u64>,
    pub retry: FileRetryConfig,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileLogFormat {
    #[default]
    Pretty,
    Json,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub format: FileLogFormat,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub workers: FileWorkersConfig,
    pub debate: FileDebateConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        validate_url("supporting_url", &self.workers.supporting_url)?;
        validate_url("opposing_url", &self.workers.opposing_url)?;

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }
        if self.workers.request_timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidRequestTimeout);
        }
        if self.debate.retry.max_attempts == 0 {
            return Err(ConfigValidationError::InvalidMaxAttempts);
        }
        if self.debate.retry.initial_backoff_ms > self.debate.retry.max_backoff_ms {
            return Err(ConfigValidationError::InvalidBackoff);
        }
        Ok(())
    }

    /// Application-level parameters for the debate use case
    pub fn debate_params(&self) -> DebateParams {
        DebateParams::from_timeout_seconds(self.debate.session_timeout_seconds)
            .with_retry(self.debate.retry.to_policy())
    }

    /// Socket address string the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn validate_url(field: &'static str, url: &str) -> Result<(), ConfigValidationError> {
    match reqwest::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(ConfigValidationError::InvalidWorkerUrl(
            field,
            format!("unsupported scheme '{}'", parsed.scheme()),
        )),
        Err(e) => Err(ConfigValidationError::InvalidWorkerUrl(field, e.to_string())),
    }
}
