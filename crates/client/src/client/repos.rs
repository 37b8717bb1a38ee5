//! Repository listing API methods for [`LogpointClient`].

use crate::client::LogpointClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::AllowedDataResponse;

impl LogpointClient {
    /// List the repositories the authenticated user may query.
    ///
    /// A response with `success == false` is still returned; the condition
    /// is logged as a warning rather than raised, matching the service's
    /// loosely specified contract.
    pub async fn allowed_repos(&self) -> Result<AllowedDataResponse> {
        endpoints::get_allowed_repos(&self.http, &self.base_url, &self.credentials).await
    }
}
