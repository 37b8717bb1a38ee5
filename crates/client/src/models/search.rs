//! Search submission and result-page models.
//!
//! # What this module handles:
//! - The submission response carrying the opaque search identifier
//! - One poll response ("page") of a paginated result set
//! - The accumulated result assembled by the poller
//!
//! # What this module does NOT handle:
//! - Polling logic (see [`crate::client::search`])
//! - HTTP transport (see [`crate::endpoints`])

use serde::{Deserialize, Serialize};

/// Response to a query submission.
///
/// The `search_id` is the sole handle for retrieving results; it is opaque
/// and has no client-visible expiry. The remaining fields echo query
/// metadata back from the service.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchSubmission {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "searchId", default)]
    pub search_id: String,
    #[serde(default)]
    pub query_filter: String,
    #[serde(default)]
    pub latest: bool,
    #[serde(default)]
    pub lookup: bool,
    #[serde(default)]
    pub query_type: String,
    #[serde(default)]
    pub client_type: String,
    /// Start and end of the search window as epoch timestamps.
    #[serde(default)]
    pub time_range: Vec<u64>,
}

/// One poll response for a search identifier.
///
/// Rows are opaque key-value records; their schema depends on the query and
/// is not modeled further. Numeric fields tolerate string-or-number typing.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchPage {
    #[serde(default)]
    pub success: bool,
    /// All result logs retrieved. The wire name is the service's spelling.
    #[serde(rename = "finial", default)]
    pub is_final: bool,
    /// Whether the search itself finished server-side.
    #[serde(default)]
    pub complete: bool,
    #[serde(
        rename = "totalPages",
        default,
        deserialize_with = "crate::serde_helpers::i64_from_string_or_number"
    )]
    pub total_pages: i64,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub num_aggregated: u64,
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub grouping: Vec<String>,
    #[serde(default)]
    pub interesting_fields: Vec<String>,
    #[serde(default)]
    pub time_range: Vec<u64>,
    /// The search identifier the page belongs to.
    #[serde(default)]
    pub orig_search_id: String,
    #[serde(default)]
    pub query_type: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub version: u64,
    #[serde(rename = "showAdditionalPanels", default)]
    pub show_additional_panels: bool,
    /// Free-form progress/status payload; shape varies per service version.
    #[serde(default)]
    pub status: serde_json::Value,
    /// Diagnostic text, populated on failure responses.
    #[serde(default)]
    pub message: String,
}

impl SearchPage {
    /// Whether this page ends the poll loop.
    ///
    /// The service exposes two completion signals that are not always
    /// consistent with each other; either one is sufficient.
    pub fn is_terminal(&self) -> bool {
        self.is_final || self.total_pages == 0
    }
}

/// Metadata snapshot taken from the most recently received page.
///
/// Not merged or validated across pages, only overwritten.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchMeta {
    pub columns: Vec<String>,
    pub grouping: Vec<String>,
    pub interesting_fields: Vec<String>,
    pub time_range: Vec<u64>,
    pub num_aggregated: u64,
}

/// Fully accumulated search result: every row batch received for one search
/// identifier, in arrival order, plus the last page's metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResult {
    pub rows: Vec<serde_json::Value>,
    pub meta: SearchMeta,
}
