//! Provider abstraction for release sources.
//!
//! A provider turns a repository identifier into the raw, ordered list of
//! releases (most recent first) exactly as the hosting service reports it.

mod github;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

pub use github::GitHubProvider;

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format. Expected 'owner/repo'.")
        } else {
            Ok(RepoId {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseAsset {
    pub name: String,
    /// Direct download URL; absent when the API record lacks one
    pub download_url: Option<String>,
}

/// Publication timestamp as the API reported it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PublishedAt {
    /// The record has no such field.
    #[default]
    Missing,
    /// An explicit `null`, as sent for drafts.
    Null,
    Value(String),
}

impl<'de> Deserialize<'de> for PublishedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(value) => PublishedAt::Value(value),
            None => PublishedAt::Null,
        })
    }
}

impl From<&str> for PublishedAt {
    fn from(value: &str) -> Self {
        PublishedAt::Value(value.to_string())
    }
}

/// A release as received from the provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Release {
    /// Version tag (e.g., "v1.0.0")
    pub tag: String,
    pub published_at: PublishedAt,
    /// Free-text release notes
    pub body: Option<String>,
    /// Canonical web page of the release
    pub html_url: String,
    pub assets: Vec<ReleaseAsset>,
}

/// Source of release listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch the release listing for a repository with a single request.
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>>;
}
