//! Form-encoded transport helper shared by all endpoints.
//!
//! Responsibilities:
//! - Embed the credential pair and optional `requestData` JSON payload into
//!   a single `application/x-www-form-urlencoded` POST body.
//! - Decode JSON response bodies into caller-specified types.
//!
//! Does NOT handle:
//! - Retries or polling (the poller in [`crate::client::search`] owns that).
//!
//! Invariants:
//! - The shared secret is never logged; neither is `requestData`, which may
//!   contain the user's query text.

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use logpoint_config::Credentials;

/// POST `extra_fields` plus the credential pair as a form-urlencoded body
/// and decode the JSON response body into `T`.
pub(crate) async fn post_form<T: DeserializeOwned>(
    http: &Client,
    base_url: &str,
    path: &str,
    credentials: &Credentials,
    extra_fields: &[(&str, &str)],
) -> Result<T> {
    let url = format!("{}{}", base_url, path);
    debug!(%path, "POST");

    let mut form: Vec<(&str, &str)> = vec![
        ("username", credentials.username.as_str()),
        ("secret_key", credentials.secret.expose_secret()),
    ];
    form.extend_from_slice(extra_fields);

    let response = http.post(&url).form(&form).send().await?;
    decode_response(response).await
}

/// POST a JSON payload in the `requestData` form field and decode the JSON
/// response body into `T`.
///
/// The service expects the JSON object URL-escaped inside a single form
/// field; reqwest's form encoder performs the escaping.
pub(crate) async fn post_request_data<T: DeserializeOwned>(
    http: &Client,
    base_url: &str,
    path: &str,
    credentials: &Credentials,
    request_data: &serde_json::Value,
) -> Result<T> {
    let payload = serde_json::to_string(request_data)?;
    post_form(
        http,
        base_url,
        path,
        credentials,
        &[("requestData", payload.as_str())],
    )
    .await
}

async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let url = response.url().to_string();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse response body: {}", e)))
}
