//! Common test utilities for integration tests.
//!
//! Provides a client factory tuned for fast polling against a wiremock
//! server, plus matchers that look inside LogPoint's form-encoded bodies.
//!
//! # Invariants
//! - `test_client` uses a 1ms poll interval and a budget of 5 attempts so
//!   poll tests finish quickly and exhaustion is cheap to trigger.

use std::time::Duration;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use wiremock::matchers::{method, path};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use logpoint_client::LogpointClient;
use logpoint_config::Credentials;
use secrecy::SecretString;
use wiremock::{Match, Request};

pub const TEST_USERNAME: &str = "test-user";
pub const TEST_SECRET: &str = "test-secret";

/// Credential pair used by all integration tests.
pub fn test_credentials() -> Credentials {
    Credentials::new(
        TEST_USERNAME,
        SecretString::new(TEST_SECRET.to_string().into()),
    )
}

/// Build a client against the mock server with fast poll settings.
pub fn test_client(base_url: &str) -> LogpointClient {
    LogpointClient::builder()
        .base_url(base_url.to_string())
        .credentials(test_credentials())
        .poll_interval(Duration::from_millis(1))
        .max_poll_attempts(5)
        .build()
        .expect("test client should build")
}

fn form_value(request: &Request, key: &str) -> Option<String> {
    url::form_urlencoded::parse(&request.body)
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Matches when the form-encoded body carries `key` with exactly `expected`.
pub struct FormField {
    key: &'static str,
    expected: String,
}

impl FormField {
    #[allow(dead_code)]
    pub fn new(key: &'static str, expected: impl Into<String>) -> Self {
        Self {
            key,
            expected: expected.into(),
        }
    }
}

impl Match for FormField {
    fn matches(&self, request: &Request) -> bool {
        form_value(request, self.key).is_some_and(|v| v == self.expected)
    }
}

/// Matches when the JSON object in the `requestData` form field has `key`
/// equal to `expected`.
pub struct RequestDataField {
    key: &'static str,
    expected: serde_json::Value,
}

impl RequestDataField {
    #[allow(dead_code)]
    pub fn new(key: &'static str, expected: impl Into<serde_json::Value>) -> Self {
        Self {
            key,
            expected: expected.into(),
        }
    }
}

impl Match for RequestDataField {
    fn matches(&self, request: &Request) -> bool {
        let Some(data) = form_value(request, "requestData") else {
            return false;
        };
        let Ok(json) = serde_json::from_str::<serde_json::Value>(&data) else {
            return false;
        };
        json.get(self.key) == Some(&self.expected)
    }
}
