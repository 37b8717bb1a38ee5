//! Search API methods for [`LogpointClient`].
//!
//! # What this module handles:
//! - Submitting search queries
//! - The result-pagination poller that turns one search identifier into a
//!   fully accumulated result
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints::search`])
//!
//! # Invariants
//! - Rows are appended in page-arrival order; no deduplication or
//!   reordering.
//! - The metadata snapshot is overwritten by each page; the last page wins.
//! - The `success` flag is authoritative only on non-terminal pages; a
//!   terminal page with `success == false` still completes normally.

use tracing::debug;

use crate::cancellation::CancellationToken;
use crate::client::LogpointClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{SearchMeta, SearchPage, SearchResult, SearchSubmission};
use logpoint_config::constants::{DEFAULT_QUERY_LIMIT, DEFAULT_QUERY_TIMEOUT_SECS};

/// A search query ready for submission.
///
/// Bundles the query parameters to avoid the `too_many_arguments` lint and
/// provide a builder-friendly API. Immutable once submitted; the service
/// echoes parts of it back in the submission response.
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a> {
    /// Free-text filter query (empty matches everything).
    pub query: &'a str,
    /// Time-range expression the service understands (e.g. "Last 1 hour").
    pub time_range: &'a str,
    /// Maximum number of rows the service should return.
    pub limit: u64,
    /// Repositories to search; empty means the service default.
    pub repos: &'a [String],
    /// Server-side timeout hint in seconds.
    pub timeout_secs: u64,
}

impl<'a> SearchRequest<'a> {
    /// Create a new search request over the given time range.
    pub fn new(query: &'a str, time_range: &'a str) -> Self {
        Self {
            query,
            time_range,
            limit: DEFAULT_QUERY_LIMIT,
            repos: &[],
            timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
        }
    }

    /// Set the row limit.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the target repositories.
    pub fn repos(mut self, repos: &'a [String]) -> Self {
        self.repos = repos;
        self
    }

    /// Set the server-side timeout hint in seconds.
    ///
    /// Values outside 5-90 seconds are sent unchanged but produce an
    /// advisory log line, since the service handles that range best.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl LogpointClient {
    /// Submit a search query.
    ///
    /// Returns the submission response; its `search_id` is the handle for
    /// [`Self::search_result`].
    pub async fn query(&self, request: SearchRequest<'_>) -> Result<SearchSubmission> {
        endpoints::submit_query(
            &self.http,
            &self.base_url,
            &self.credentials,
            request.query,
            request.time_range,
            request.limit,
            request.repos,
            request.timeout_secs,
        )
        .await
    }

    /// Submit a search query and poll until the full result is available.
    pub async fn search(&self, request: SearchRequest<'_>) -> Result<SearchResult> {
        let submission = self.query(request).await?;
        self.search_result(&submission.search_id).await
    }

    /// Accumulate all result pages for a search identifier.
    ///
    /// Equivalent to [`Self::search_result_with_cancel`] with a token that
    /// never fires.
    pub async fn search_result(&self, search_id: &str) -> Result<SearchResult> {
        self.search_result_with_cancel(search_id, &CancellationToken::new())
            .await
    }

    /// Accumulate all result pages for a search identifier, aborting
    /// promptly when `cancel` fires.
    ///
    /// The service streams results in chunks identified by the same search
    /// identifier, with no server-side cursor token: the identical request
    /// is re-sent until a response flags completion. A page is terminal when
    /// its completion flag is set or its total-page count is zero; either
    /// signal suffices. Between requests the poller sleeps for the
    /// configured interval, racing the sleep against cancellation.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Rejected`] if a non-terminal page reports
    ///   `success == false`, carrying the page's message
    /// - [`ClientError::PollExhausted`] once the attempt budget is spent
    ///   without a terminal page; accumulated rows are discarded
    /// - [`ClientError::Cancelled`] when the token fires
    /// - Transport errors are propagated as-is; the poller never retries a
    ///   failed request
    pub async fn search_result_with_cancel(
        &self,
        search_id: &str,
        cancel: &CancellationToken,
    ) -> Result<SearchResult> {
        let mut rows: Vec<serde_json::Value> = Vec::new();
        let mut meta = SearchMeta::default();
        let mut attempts = 0usize;

        loop {
            if cancel.is_cancelled() {
                return Err(ClientError::Cancelled);
            }

            tokio::select! {
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                _ = tokio::time::sleep(self.poll_interval) => {}
            }

            let page = endpoints::poll_result(
                &self.http,
                &self.base_url,
                &self.credentials,
                search_id,
            )
            .await?;

            let terminal = page.is_terminal();
            if !page.success && !terminal {
                return Err(ClientError::Rejected {
                    message: page.message,
                });
            }

            let SearchPage {
                rows: batch,
                columns,
                grouping,
                interesting_fields,
                time_range,
                num_aggregated,
                ..
            } = page;

            rows.extend(batch);
            meta = SearchMeta {
                columns,
                grouping,
                interesting_fields,
                time_range,
                num_aggregated,
            };

            debug!(
                search_id,
                num_aggregated = meta.num_aggregated,
                total_rows = rows.len(),
                terminal,
                "received result page"
            );

            if terminal {
                return Ok(SearchResult { rows, meta });
            }

            attempts += 1;
            if attempts >= self.max_poll_attempts {
                return Err(ClientError::PollExhausted { attempts });
            }
        }
    }
}
