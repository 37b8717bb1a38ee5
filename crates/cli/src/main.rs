//! LogPoint CLI - Command-line interface for the LogPoint search API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute LogPoint API commands via the shared client library.
//! - Format and display results (table, JSON, NDJSON).
//!
//! Does NOT handle:
//! - Core API logic or polling (see `crates/client`).
//! - Persistence of credentials or results.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap
//!   env defaults.
//! - Log output goes to stderr; stdout carries only command output.
//! - Ctrl+C cancels in-flight polling and exits 130.

mod args;
mod commands;
mod error;
mod formatters;

use std::time::Duration;

use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use logpoint_client::{CancellationToken, ClientError, LogpointClient};
use logpoint_config::ConfigLoader;
use secrecy::SecretString;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn is_cancelled_error(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ClientError>(),
        Some(ClientError::Cancelled)
    )
}

async fn run_command(
    command: Commands,
    client: &LogpointClient,
    format: formatters::OutputFormat,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    match command {
        Commands::Repos => commands::repos::handle(client, format).await,
        Commands::Search {
            query,
            time_range,
            limit,
            repos,
            timeout_secs,
        } => {
            commands::search::handle(
                client,
                format,
                cancel,
                commands::search::SearchArgs {
                    query,
                    time_range,
                    limit,
                    repos,
                    timeout_secs,
                },
            )
            .await
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = match formatters::OutputFormat::parse(&cli.output) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // clap already folds the LOGPOINT_* env vars into the parsed args; the
    // loader still runs from_env() to pick up anything clap does not model.
    let mut loader = ConfigLoader::new();
    if let Some(url) = cli.base_url {
        loader = loader.with_base_url(url);
    }
    if let Some(username) = cli.username {
        loader = loader.with_username(username);
    }
    if let Some(secret) = cli.secret_key {
        loader = loader.with_secret(SecretString::new(secret.into()));
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(interval_ms) = cli.poll_interval_ms {
        loader = loader.with_poll_interval(Duration::from_millis(interval_ms));
    }
    if let Some(attempts) = cli.max_poll_attempts {
        loader = loader.with_max_poll_attempts(attempts);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    let loader = match loader.from_env() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let config = match loader.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let client = match LogpointClient::builder().from_config(&config).build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build client: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // Create cancellation token and set up signal handling
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli.command, &client, format, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            eprintln!("^C\nOperation cancelled by user");
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
