//! Environment-based configuration loading.
//!
//! Responsibilities:
//! - Read and parse `LOGPOINT_*` environment variables.
//! - Provide a builder-pattern `ConfigLoader` merging env values with
//!   programmatic overrides.
//! - Build the final `Config`.
//!
//! Does NOT handle:
//! - Persisting configuration (credentials are never written to disk).
//! - Validating the base URL beyond presence (the client builder parses it).
//!
//! Invariants:
//! - Builder methods take precedence over environment variables.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

use crate::constants::{
    DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS,
    MAX_POLL_INTERVAL_MS, MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, Credentials};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Base URL is required. Set LOGPOINT_BASE_URL or pass one explicitly.")]
    MissingBaseUrl,

    #[error("Credentials are required. Set LOGPOINT_USERNAME and LOGPOINT_SECRET_KEY.")]
    MissingCredentials,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Failed to load .env file: {0}")]
    Dotenv(String),
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_u64(var: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a non-negative integer".to_string(),
    })
}

/// Configuration loader that builds a [`Config`] from environment variables
/// and programmatic overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    secret: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    poll_interval: Option<Duration>,
    max_poll_attempts: Option<usize>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the current directory, if one exists.
    ///
    /// Missing files are fine; malformed files are an error. Must be called
    /// before `from_env()` for the `.env` values to be visible. Setting
    /// `DOTENV_DISABLED` skips loading entirely, which keeps integration
    /// tests hermetic.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        if env_var_or_none("DOTENV_DISABLED").is_some() {
            return Ok(());
        }
        match dotenvy::dotenv() {
            Ok(_) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            // Report the error kind only; .env lines may contain secrets.
            Err(e) => Err(ConfigError::Dotenv(e.to_string())),
        }
    }

    /// Apply `LOGPOINT_*` environment variables to any field not already set
    /// by a builder method.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if self.base_url.is_none() {
            self.base_url = env_var_or_none("LOGPOINT_BASE_URL");
        }
        if self.username.is_none() {
            self.username = env_var_or_none("LOGPOINT_USERNAME");
        }
        if self.secret.is_none() {
            self.secret =
                env_var_or_none("LOGPOINT_SECRET_KEY").map(|s| SecretString::new(s.into()));
        }
        if self.skip_verify.is_none() {
            if let Some(skip) = env_var_or_none("LOGPOINT_SKIP_VERIFY") {
                self.skip_verify = Some(skip.parse().map_err(|_| ConfigError::InvalidValue {
                    var: "LOGPOINT_SKIP_VERIFY".to_string(),
                    message: "must be true or false".to_string(),
                })?);
            }
        }
        if self.timeout.is_none() {
            if let Some(timeout) = env_var_or_none("LOGPOINT_TIMEOUT") {
                let secs = parse_u64("LOGPOINT_TIMEOUT", &timeout)?;
                if secs == 0 || secs > MAX_TIMEOUT_SECS {
                    return Err(ConfigError::InvalidValue {
                        var: "LOGPOINT_TIMEOUT".to_string(),
                        message: format!("must be between 1 and {} seconds", MAX_TIMEOUT_SECS),
                    });
                }
                self.timeout = Some(Duration::from_secs(secs));
            }
        }
        if self.poll_interval.is_none() {
            if let Some(interval) = env_var_or_none("LOGPOINT_POLL_INTERVAL_MS") {
                let ms = parse_u64("LOGPOINT_POLL_INTERVAL_MS", &interval)?;
                if ms > MAX_POLL_INTERVAL_MS {
                    return Err(ConfigError::InvalidValue {
                        var: "LOGPOINT_POLL_INTERVAL_MS".to_string(),
                        message: format!("must be at most {} ms", MAX_POLL_INTERVAL_MS),
                    });
                }
                self.poll_interval = Some(Duration::from_millis(ms));
            }
        }
        if self.max_poll_attempts.is_none() {
            if let Some(attempts) = env_var_or_none("LOGPOINT_MAX_POLL_ATTEMPTS") {
                let n = parse_u64("LOGPOINT_MAX_POLL_ATTEMPTS", &attempts)?;
                self.max_poll_attempts = Some(n as usize);
            }
        }
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the shared secret.
    pub fn with_secret(mut self, secret: SecretString) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Set whether to skip TLS certificate verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the delay between result poll requests.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Set the poll attempt budget.
    pub fn with_max_poll_attempts(mut self, attempts: usize) -> Self {
        self.max_poll_attempts = Some(attempts);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] or
    /// [`ConfigError::MissingCredentials`] when required fields were neither
    /// set programmatically nor present in the environment.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;
        let (username, secret) = match (self.username, self.secret) {
            (Some(u), Some(s)) => (u, s),
            _ => return Err(ConfigError::MissingCredentials),
        };

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout: self
                    .timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
                poll_interval_ms: self
                    .poll_interval
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
                max_poll_attempts: self.max_poll_attempts.unwrap_or(DEFAULT_MAX_POLL_ATTEMPTS),
            },
            credentials: Credentials::new(username, secret),
        })
    }
}
