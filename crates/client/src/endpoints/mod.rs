//! HTTP endpoint implementations.
//!
//! Every LogPoint call is a form-urlencoded POST carrying the credential
//! pair; the search endpoints additionally embed a JSON object in the
//! `requestData` field. Functions here own the wire format and decoding;
//! retry/poll policy lives in [`crate::client`].

mod allowed_data;
mod request;
pub mod search;

pub use allowed_data::{ALLOWED_DATA_PATH, get_allowed_repos};
pub use search::{SEARCH_LOGS_PATH, poll_result, submit_query};
