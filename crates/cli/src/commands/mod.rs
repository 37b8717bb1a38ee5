//! Command handlers for logpoint-cli.

pub mod repos;
pub mod search;
