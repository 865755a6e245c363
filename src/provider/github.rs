//! GitHub provider implementation.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::{Provider, Release, ReleaseAsset, RepoId};

/// GitHub API response types (internal).
///
/// Every field is optional so one incomplete record does not sink the
/// whole listing.
mod api {
    use serde::Deserialize;

    use crate::provider::PublishedAt;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        #[serde(default)]
        pub tag_name: String,
        #[serde(default)]
        pub published_at: PublishedAt,
        #[serde(default)]
        pub body: Option<String>,
        #[serde(default)]
        pub html_url: String,
        #[serde(default)]
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        #[serde(default)]
        pub name: String,
        #[serde(default)]
        pub browser_download_url: Option<String>,
    }
}

/// GitHub provider implementation.
pub struct GitHubProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubProvider {
    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// One GET against the listing endpoint; whatever page size the API
    /// defaults to is what we get.
    async fn fetch_releases(&self, repo: &RepoId) -> Result<Vec<api::Release>> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.api_url, repo.owner, repo.repo
        );
        debug!("Fetching releases from {}...", url);
        self.http_client.get_json(&url).await
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    #[tracing::instrument(skip(self))]
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>> {
        let releases = self.fetch_releases(repo).await?;
        debug!("Received {} releases for {}", releases.len(), repo);
        Ok(releases.into_iter().map(|r| r.into()).collect())
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            tag: r.tag_name,
            published_at: r.published_at,
            body: r.body,
            html_url: r.html_url,
            assets: r.assets.into_iter().map(|a| a.into()).collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name,
            download_url: a.browser_download_url,
        }
    }
}
