//! Centralized constants for the LogPoint client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Result Polling Defaults
// =============================================================================

/// Default delay between result poll requests in milliseconds.
///
/// Each poll re-sends the same search identifier; the delay keeps the client
/// from hammering the service while it assembles the next chunk.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Maximum allowed poll interval in milliseconds (1 minute).
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;

/// Default number of non-terminal pages tolerated before giving up.
pub const DEFAULT_MAX_POLL_ATTEMPTS: usize = 50;

// =============================================================================
// Query Defaults
// =============================================================================

/// Default server-side timeout hint for a submitted query, in seconds.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

/// Lower bound of the timeout-hint range the service handles well.
///
/// Values outside the recommended range are still sent as-is; the client
/// only logs an advisory.
pub const QUERY_TIMEOUT_RECOMMENDED_MIN_SECS: u64 = 5;

/// Upper bound of the timeout-hint range the service handles well.
pub const QUERY_TIMEOUT_RECOMMENDED_MAX_SECS: u64 = 90;

/// Default row limit for a submitted query.
pub const DEFAULT_QUERY_LIMIT: u64 = 100;
