//! Configuration and service construction.
//!
//! The only settings are the repository whose releases are shown, the API
//! base URL and an optional `GITHUB_TOKEN`.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{
    http::HttpClient,
    provider::{DEFAULT_API_URL, GitHubProvider, RepoId},
    runtime::Runtime,
};

/// Repository shown when none is given.
pub const DEFAULT_REPO: &str = "PeterHindes/chess-godot-demo";

/// User agent sent with every request (the GitHub API rejects requests without one).
pub const USER_AGENT: &str = "ghrel-cli";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub repo: RepoId,
    pub api_url: String,
    pub token: Option<String>,
}

impl Config {
    /// Resolve configuration from CLI values, falling back to defaults.
    /// The token comes from the `GITHUB_TOKEN` environment variable.
    pub fn load<R: Runtime>(
        runtime: &R,
        repo: Option<&str>,
        api_url: Option<&str>,
    ) -> Result<Self> {
        let repo = repo
            .unwrap_or(DEFAULT_REPO)
            .parse::<RepoId>()
            .context("Invalid --repo value")?;
        let api_url = api_url.unwrap_or(DEFAULT_API_URL).to_string();
        let token = runtime
            .env_var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        debug!("Using repo {} at {}", repo, api_url);

        Ok(Self {
            repo,
            api_url,
            token,
        })
    }
}

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}

/// Build the GitHub provider from configuration
pub fn build_provider(config: &Config) -> Result<GitHubProvider> {
    let http_client = build_http_client(config.token.as_deref())?;
    Ok(GitHubProvider::from_http_client(http_client, &config.api_url))
}
