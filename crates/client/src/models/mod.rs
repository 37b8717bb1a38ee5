//! Response models for the LogPoint API.
//!
//! Field names mirror the wire format exactly, including the service's
//! misspelled `finial` completion flag; Rust-side names are corrected via
//! serde renames.

mod repos;
mod search;

pub use repos::{AllowedDataResponse, LogpointInstance, Repository};
pub use search::{SearchMeta, SearchPage, SearchResult, SearchSubmission};
