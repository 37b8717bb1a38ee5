//! Allowed-data (repository listing) endpoint.

use reqwest::Client;
use tracing::{debug, warn};

use crate::endpoints::request::post_form;
use crate::error::Result;
use crate::models::AllowedDataResponse;
use logpoint_config::Credentials;

/// Path of the allowed-data endpoint.
pub const ALLOWED_DATA_PATH: &str = "/getalloweddata";

/// List the repositories the authenticated user may query.
///
/// Unlike the search endpoints this call uses plain form fields only, no
/// `requestData` payload. A response with `success == false` is returned to
/// the caller as-is with a logged warning; the upstream contract does not
/// make clear whether the body is unusable in that case.
pub async fn get_allowed_repos(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<AllowedDataResponse> {
    debug!("listing allowed repos");

    let response: AllowedDataResponse = post_form(
        http,
        base_url,
        ALLOWED_DATA_PATH,
        credentials,
        &[("type", "logpoint_repos")],
    )
    .await?;

    if !response.success {
        warn!("allowed-data endpoint reported failure; returning response anyway");
    }

    Ok(response)
}
