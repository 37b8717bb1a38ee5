//! Shared test utilities for logpoint-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (credentials, base URLs).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Dummy credentials satisfy config validation unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `logpoint-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Dummy credentials are set to satisfy config validation.
/// - Other sensitive env vars are cleared to avoid leakage from the host.
pub fn logpoint_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logpoint-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Satisfy configuration requirements for non-config tests
    cmd.env("LOGPOINT_USERNAME", "test-user");
    cmd.env("LOGPOINT_SECRET_KEY", "test-secret");

    // Clear potential host leakage
    cmd.env_remove("LOGPOINT_BASE_URL")
        .env_remove("LOGPOINT_TIMEOUT")
        .env_remove("LOGPOINT_POLL_INTERVAL_MS")
        .env_remove("LOGPOINT_MAX_POLL_ATTEMPTS")
        .env_remove("LOGPOINT_SKIP_VERIFY");

    cmd
}

/// Returns a hermetic `logpoint-cli` command with a specific base URL.
#[allow(dead_code)]
pub fn logpoint_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = logpoint_cmd();
    cmd.env("LOGPOINT_BASE_URL", base_url);
    cmd
}
