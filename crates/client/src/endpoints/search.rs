//! Search submission and result-poll endpoints.
//!
//! Submission and polling share [`SEARCH_LOGS_PATH`]; the payload shape
//! selects the behavior. A `searchId`-only payload polls an existing search,
//! anything else starts a new one.

use reqwest::Client;
use tracing::{debug, warn};

use crate::endpoints::request::post_request_data;
use crate::error::Result;
use crate::models::{SearchPage, SearchSubmission};
use logpoint_config::Credentials;
use logpoint_config::constants::{
    QUERY_TIMEOUT_RECOMMENDED_MAX_SECS, QUERY_TIMEOUT_RECOMMENDED_MIN_SECS,
};

/// Path shared by query submission and result polling.
pub const SEARCH_LOGS_PATH: &str = "/getsearchlogs";

/// Submit a new search query and return the submission response, including
/// the search identifier used for all subsequent polling.
///
/// A timeout hint outside the range the service handles well produces an
/// advisory log line; the requested value is sent unchanged.
#[allow(clippy::too_many_arguments)]
pub async fn submit_query(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    query: &str,
    time_range: &str,
    limit: u64,
    repos: &[String],
    timeout_secs: u64,
) -> Result<SearchSubmission> {
    if !(QUERY_TIMEOUT_RECOMMENDED_MIN_SECS..=QUERY_TIMEOUT_RECOMMENDED_MAX_SECS)
        .contains(&timeout_secs)
    {
        warn!(
            timeout_secs,
            "query timeout outside the recommended {}-{}s range",
            QUERY_TIMEOUT_RECOMMENDED_MIN_SECS,
            QUERY_TIMEOUT_RECOMMENDED_MAX_SECS
        );
    }

    debug!(time_range, limit, repo_count = repos.len(), "submitting search query");

    let request_data = serde_json::json!({
        "timeout": timeout_secs,
        "query": query,
        "time_range": time_range,
        "limit": limit,
        "repos": repos,
    });

    post_request_data(http, base_url, SEARCH_LOGS_PATH, credentials, &request_data).await
}

/// Request the next available result page for a search identifier.
///
/// The service has no cursor token; the identical request is re-sent until a
/// response flags completion.
pub async fn poll_result(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    search_id: &str,
) -> Result<SearchPage> {
    debug!(search_id, "polling search result");

    let request_data = serde_json::json!({ "searchId": search_id });

    post_request_data(http, base_url, SEARCH_LOGS_PATH, credentials, &request_data).await
}
