//! Repository listing models.

use serde::Deserialize;

/// One log repository the authenticated user may target in a query.
#[derive(Debug, Deserialize, Clone)]
pub struct Repository {
    /// Repository name, as used in query submission.
    pub repo: String,
    #[serde(default)]
    pub address: String,
}

/// One LogPoint instance backing the repositories.
#[derive(Debug, Deserialize, Clone)]
pub struct LogpointInstance {
    pub name: String,
    #[serde(default)]
    pub ip: String,
}

/// Response of the allowed-data endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct AllowedDataResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub allowed_repos: Vec<Repository>,
    #[serde(default)]
    pub logpoint: Vec<LogpointInstance>,
}

impl AllowedDataResponse {
    /// Repository names in listing order, ready to pass to a search request.
    pub fn repo_names(&self) -> Vec<String> {
        self.allowed_repos.iter().map(|r| r.repo.clone()).collect()
    }
}
