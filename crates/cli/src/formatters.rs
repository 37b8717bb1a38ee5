//! Output formatting for CLI results.
//!
//! Responsibilities:
//! - Render the repository listing and accumulated search results as a
//!   plain-text table, pretty JSON, or newline-delimited JSON.
//!
//! Does NOT handle:
//! - Writing to stdout/stderr (commands print the returned string).
//!
//! Invariants:
//! - Table output derives its columns from the result metadata when present,
//!   falling back to the first row's keys.
//! - Rows keep their arrival order in every format.

use anyhow::bail;
use logpoint_client::{AllowedDataResponse, SearchResult};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Ndjson,
}

impl OutputFormat {
    /// Parse a format name as given on the command line.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "ndjson" => Ok(Self::Ndjson),
            other => bail!("unknown output format '{}' (expected table, json, or ndjson)", other),
        }
    }
}

/// Render the repository listing.
pub fn format_repos(response: &AllowedDataResponse, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json | OutputFormat::Ndjson => serde_json::json!({
            "allowed_repos": response
                .allowed_repos
                .iter()
                .map(|r| serde_json::json!({"repo": r.repo, "address": r.address}))
                .collect::<Vec<_>>(),
        })
        .to_string(),
        OutputFormat::Table => {
            let name_width = response
                .allowed_repos
                .iter()
                .map(|r| r.repo.len())
                .chain(std::iter::once("REPO".len()))
                .max()
                .unwrap_or(4);

            let mut out = format!("{:<name_width$}  ADDRESS", "REPO");
            for repo in &response.allowed_repos {
                out.push('\n');
                out.push_str(&format!("{:<name_width$}  {}", repo.repo, repo.address));
            }
            out
        }
    }
}

fn render_cell(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render the accumulated search result.
pub fn format_search_result(result: &SearchResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Ndjson => result
            .rows
            .iter()
            .map(|row| row.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Table => {
            // Prefer the server-reported columns; fall back to the first
            // row's keys for queries the service returns without metadata.
            let columns: Vec<String> = if !result.meta.columns.is_empty() {
                result.meta.columns.clone()
            } else if let Some(serde_json::Value::Object(first)) = result.rows.first() {
                first.keys().cloned().collect()
            } else {
                return String::new();
            };

            let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
            let cells: Vec<Vec<String>> = result
                .rows
                .iter()
                .map(|row| {
                    columns
                        .iter()
                        .enumerate()
                        .map(|(i, col)| {
                            let cell = render_cell(row.get(col));
                            widths[i] = widths[i].max(cell.len());
                            cell
                        })
                        .collect()
                })
                .collect();

            let header: Vec<String> = columns
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{:<width$}", c.to_uppercase(), width = widths[i]))
                .collect();
            let mut out = header.join("  ").trim_end().to_string();

            for row in cells {
                let line: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                    .collect();
                out.push('\n');
                out.push_str(line.join("  ").trim_end());
            }
            out
        }
    }
}
