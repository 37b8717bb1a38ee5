//! `logpoint-cli search` - submit a query and poll for the full result.

use logpoint_client::{CancellationToken, LogpointClient, SearchRequest};

use crate::formatters::{OutputFormat, format_search_result};

pub struct SearchArgs {
    pub query: String,
    pub time_range: String,
    pub limit: u64,
    pub repos: Vec<String>,
    pub timeout_secs: u64,
}

pub async fn handle(
    client: &LogpointClient,
    format: OutputFormat,
    cancel: &CancellationToken,
    args: SearchArgs,
) -> anyhow::Result<()> {
    // With no explicit repos, search everything the user may read.
    let repos = if args.repos.is_empty() {
        client.allowed_repos().await?.repo_names()
    } else {
        args.repos
    };

    let submission = client
        .query(
            SearchRequest::new(&args.query, &args.time_range)
                .limit(args.limit)
                .repos(&repos)
                .timeout_secs(args.timeout_secs),
        )
        .await?;

    tracing::info!(search_id = %submission.search_id, "search submitted");

    let result = client
        .search_result_with_cancel(&submission.search_id, cancel)
        .await?;

    tracing::info!(
        rows = result.rows.len(),
        num_aggregated = result.meta.num_aggregated,
        "search complete"
    );

    println!("{}", format_search_result(&result, format));
    Ok(())
}
