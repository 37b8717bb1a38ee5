//! LogPoint search API client.
//!
//! This crate provides a typed client for the LogPoint log-search HTTP API.
//! It submits search queries, polls the paginated result endpoint until the
//! service reports completion, and lists the repositories the authenticated
//! user may query. Every request is signed with a username/shared-secret
//! pair; there is no session or token exchange.

pub mod cancellation;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

pub use cancellation::CancellationToken;
pub use client::LogpointClient;
pub use client::builder::LogpointClientBuilder;
pub use client::search::SearchRequest;
pub use error::{ClientError, Result};
pub use models::{
    AllowedDataResponse, LogpointInstance, Repository, SearchMeta, SearchPage, SearchResult,
    SearchSubmission,
};
