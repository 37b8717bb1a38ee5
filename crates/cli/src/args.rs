//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not build the client (see `main`).

use clap::{Parser, Subcommand};
use logpoint_config::constants::{DEFAULT_QUERY_LIMIT, DEFAULT_QUERY_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "logpoint-cli")]
#[command(about = "LogPoint CLI - Query a LogPoint server from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  logpoint-cli repos\n  logpoint-cli search 'device_ip=10.0.0.1' --time-range 'Last 1 hour'\n  logpoint-cli search '' --repo default --repo firewall --limit 500 --output json\n"
)]
pub struct Cli {
    /// Base URL of the LogPoint server (e.g., https://logpoint.example.com)
    #[arg(short, long, global = true, env = "LOGPOINT_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for authentication
    #[arg(short, long, global = true, env = "LOGPOINT_USERNAME")]
    pub username: Option<String>,

    /// Shared secret for authentication
    #[arg(short, long, global = true, env = "LOGPOINT_SECRET_KEY")]
    pub secret_key: Option<String>,

    /// Connection timeout in seconds
    #[arg(long, global = true, env = "LOGPOINT_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Delay between result poll requests in milliseconds
    #[arg(long, global = true, env = "LOGPOINT_POLL_INTERVAL_MS")]
    pub poll_interval_ms: Option<u64>,

    /// Maximum number of result poll attempts before giving up
    #[arg(long, global = true, env = "LOGPOINT_MAX_POLL_ATTEMPTS")]
    pub max_poll_attempts: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "LOGPOINT_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Output format (table, json, ndjson)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the repositories the authenticated user may query
    Repos,

    /// Submit a search query and poll until the full result arrives
    Search {
        /// The filter query to execute (an empty query matches everything)
        query: String,

        /// Time range expression the server understands (e.g., 'Last 1 hour')
        #[arg(short, long, default_value = "Last 1 hour")]
        time_range: String,

        /// Maximum number of rows to return
        #[arg(short, long, default_value_t = DEFAULT_QUERY_LIMIT)]
        limit: u64,

        /// Repository to search (repeatable; all allowed repos when omitted)
        #[arg(short, long = "repo", value_name = "REPO")]
        repos: Vec<String>,

        /// Server-side timeout hint in seconds (5-90 recommended)
        #[arg(long, default_value_t = DEFAULT_QUERY_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
}
