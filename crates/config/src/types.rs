//! Configuration types for the LogPoint client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, polling).
//! - Define the credential pair used to sign every request.
//! - Provide serialization helpers for `Duration` and `SecretString`.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network calls (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - The shared secret uses `secrecy::SecretString` so it never appears in
//!   `Debug` output or logs.

use crate::constants::{DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Module for serializing SecretString as a plain string.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Credential pair sent with every LogPoint API request.
///
/// LogPoint has no session or token exchange; the username and shared secret
/// ride along as form fields on each POST.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Shared secret issued for the account.
    #[serde(with = "secret_string")]
    pub secret: SecretString,
}

impl Credentials {
    /// Create a new credential pair.
    pub fn new(username: impl Into<String>, secret: SecretString) -> Self {
        Self {
            username: username.into(),
            secret,
        }
    }
}

/// Connection configuration for a LogPoint server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the LogPoint server (e.g., https://logpoint.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Delay between result poll requests, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Number of non-terminal result pages tolerated before giving up.
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: usize,
}

pub(crate) fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

pub(crate) fn default_max_poll_attempts() -> usize {
    DEFAULT_MAX_POLL_ATTEMPTS
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Credentials sent with every request
    pub credentials: Credentials,
}

impl Config {
    /// Create a new config with the given base URL and credential pair,
    /// using default timeouts and poll tunables.
    pub fn new(base_url: String, username: String, secret: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                poll_interval_ms: default_poll_interval_ms(),
                max_poll_attempts: default_max_poll_attempts(),
            },
            credentials: Credentials::new(username, secret),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_defaults() {
        let secret = SecretString::new("test-secret".to_string().into());
        let config = Config::new(
            "https://logpoint.example.com".to_string(),
            "admin".to_string(),
            secret,
        );
        assert_eq!(config.connection.base_url, "https://logpoint.example.com");
        assert!(!config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(config.connection.poll_interval_ms, 1000);
        assert_eq!(config.connection.max_poll_attempts, 50);
    }

    #[test]
    fn test_connection_config_serde_seconds() {
        let config = ConnectionConfig {
            base_url: "https://logpoint.example.com".to_string(),
            skip_verify: true,
            timeout: Duration::from_secs(60),
            poll_interval_ms: 250,
            max_poll_attempts: 10,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ConnectionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.timeout, Duration::from_secs(60));
        assert_eq!(deserialized.poll_interval_ms, 250);
        assert_eq!(deserialized.max_poll_attempts, 10);
    }

    #[test]
    fn test_connection_config_poll_fields_default_when_missing() {
        let json = r#"{
            "base_url": "https://logpoint.example.com",
            "skip_verify": false,
            "timeout": 30
        }"#;
        let config: ConnectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.max_poll_attempts, 50);
    }

    /// Config Debug output must not expose the shared secret.
    #[test]
    fn test_config_debug_does_not_expose_secret() {
        let secret = SecretString::new("my-secret-key".to_string().into());
        let config = Config::new(
            "https://logpoint.example.com".to_string(),
            "admin".to_string(),
            secret,
        );

        let debug_output = format!("{:?}", config);

        assert!(
            !debug_output.contains("my-secret-key"),
            "Debug output should not contain the shared secret"
        );
        assert!(debug_output.contains("admin"));
        assert!(debug_output.contains("https://logpoint.example.com"));
    }

    /// Serialization DOES include the secret; secrecy guards logging, not
    /// explicit serialization.
    #[test]
    fn test_credentials_serialization_includes_secret() {
        use secrecy::ExposeSecret;

        let creds = Credentials::new(
            "admin",
            SecretString::new("serializable-secret".to_string().into()),
        );
        let json = serde_json::to_string(&creds).unwrap();
        assert!(json.contains("serializable-secret"));

        let deserialized: Credentials = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.username, "admin");
        assert_eq!(deserialized.secret.expose_secret(), "serializable-secret");
    }
}
