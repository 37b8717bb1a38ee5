//! `logpoint-cli repos` - list the repositories the user may query.

use logpoint_client::LogpointClient;

use crate::formatters::{OutputFormat, format_repos};

pub async fn handle(client: &LogpointClient, format: OutputFormat) -> anyhow::Result<()> {
    let response = client.allowed_repos().await?;
    println!("{}", format_repos(&response, format));
    Ok(())
}
