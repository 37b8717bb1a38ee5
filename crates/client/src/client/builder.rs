//! Client builder for constructing [`LogpointClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`LogpointClient`] methods)
//! - Poll-loop policy beyond carrying its tunables
//!
//! # Invariants
//! - `base_url` and `credentials` are required fields and must be provided
//!   before calling `build()`
//! - The base URL must parse as an http(s) URL and is normalized to have no
//!   trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a
//!   warning

use std::time::Duration;

use crate::client::LogpointClient;
use crate::error::{ClientError, Result};
use logpoint_config::{
    Config, Credentials,
    constants::{
        DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_MAX_REDIRECTS, DEFAULT_POLL_INTERVAL_MS,
        DEFAULT_TIMEOUT_SECS,
    },
};

/// Builder for creating a new [`LogpointClient`].
///
/// All configuration options have sensible defaults except `base_url` and
/// `credentials`, which are required.
pub struct LogpointClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
    poll_interval: Duration,
    max_poll_attempts: usize,
}

impl Default for LogpointClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

impl LogpointClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the LogPoint server.
    ///
    /// This should include the protocol, e.g. `https://logpoint.example.com`.
    /// Trailing slashes are removed automatically.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the credential pair sent with every request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle
    /// attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the delay between result poll requests.
    ///
    /// Default is 1 second.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the number of non-terminal result pages tolerated before the
    /// poller gives up.
    ///
    /// Default is 50.
    pub fn max_poll_attempts(mut self, attempts: usize) -> Self {
        self.max_poll_attempts = attempts;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// Centralizes the conversion from config crate types so callers do not
    /// duplicate the mapping.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(config.credentials.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.poll_interval = Duration::from_millis(config.connection.poll_interval_ms);
        self.max_poll_attempts = config.connection.max_poll_attempts;
        self
    }

    /// Validate the base URL and strip trailing slashes.
    ///
    /// Trailing-slash removal prevents double slashes when concatenating
    /// endpoint paths.
    fn normalize_base_url(url: String) -> Result<String> {
        let parsed =
            url::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "{}: expected an http or https URL",
                url
            )));
        }
        Ok(url.trim_end_matches('/').to_string())
    }

    /// Build the [`LogpointClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or
    /// does not parse as an http(s) URL, [`ClientError::MissingCredentials`]
    /// if no credential pair was provided, and `ClientError::Http` if the
    /// HTTP client fails to build.
    pub fn build(self) -> Result<LogpointClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url)?;

        let credentials = self.credentials.ok_or(ClientError::MissingCredentials)?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification; an
                // HTTP URL has no TLS layer for it to act on.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(LogpointClient {
            http,
            base_url,
            credentials,
            poll_interval: self.poll_interval,
            max_poll_attempts: self.max_poll_attempts,
        })
    }
}
