//! Main LogPoint API client and API methods.
//!
//! This module provides the primary [`LogpointClient`] for interacting with
//! the LogPoint search API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search`: Query submission and the result-pagination poller
//! - `repos`: Repository listing
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - One connection-pooled `reqwest::Client` per credential set, constructed
//!   once at build time and reused for every call.
//! - All API methods take `&self`; distinct searches may be polled
//!   concurrently from the same client.

pub mod builder;

mod repos;
pub mod search;

use std::time::Duration;

use logpoint_config::Credentials;

/// LogPoint search API client.
///
/// # Creating a Client
///
/// Use [`LogpointClient::builder()`]:
///
/// ```rust,ignore
/// use logpoint_client::LogpointClient;
/// use logpoint_config::Credentials;
/// use secrecy::SecretString;
///
/// let client = LogpointClient::builder()
///     .base_url("https://logpoint.example.com".to_string())
///     .credentials(Credentials::new(
///         "auditor",
///         SecretString::new("shared-secret".to_string().into()),
///     ))
///     .build()?;
/// ```
///
/// # Authentication
///
/// Every request carries the username and shared secret as form fields;
/// there is no session to establish or renew.
#[derive(Debug)]
pub struct LogpointClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) poll_interval: Duration,
    pub(crate) max_poll_attempts: usize,
}

impl LogpointClient {
    /// Create a new client builder.
    pub fn builder() -> builder::LogpointClientBuilder {
        builder::LogpointClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
