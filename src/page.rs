//! Release page view state.
//!
//! [`ReleasePage::load`] performs the one fetch of a page view and keeps the
//! normalized releases; [`ReleasePage::select`] renders details from that
//! held list without going back to the network.

use anyhow::Result;
use log::{debug, error, info};

use crate::{
    provider::{Provider, RepoId},
    release::{NormalizedRelease, normalize},
    render::{
        VersionOption, render_detail, render_error, render_latest, render_options,
        version_options,
    },
};

/// Outcome of a change of the version selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The placeholder was chosen; the detail panel is deactivated.
    Cleared,
    /// Detail markup for the chosen release.
    Detail(String),
    /// The value does not name a held release; nothing changes.
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePage {
    repo: RepoId,
    releases: Vec<NormalizedRelease>,
    error: Option<String>,
}

impl ReleasePage {
    /// Fetch, normalize and hold the releases of `repo`.
    ///
    /// Never fails: a fetch error is logged and kept as the page's error
    /// message, leaving the release list empty.
    #[tracing::instrument(skip(provider))]
    pub async fn load<P: Provider + ?Sized>(provider: &P, repo: &RepoId) -> Self {
        info!("Fetching releases for {}...", repo);

        match Self::fetch(provider, repo).await {
            Ok(releases) => {
                debug!("Loaded {} releases for {}", releases.len(), repo);
                Self::from_releases(repo.clone(), releases)
            }
            Err(e) => {
                error!("Error in release process: {:#}", e);
                Self::failed(repo.clone(), format!("{:#}", e))
            }
        }
    }

    async fn fetch<P: Provider + ?Sized>(
        provider: &P,
        repo: &RepoId,
    ) -> Result<Vec<NormalizedRelease>> {
        let raw = provider.get_releases(repo).await?;
        Ok(normalize(&raw))
    }

    pub fn from_releases(repo: RepoId, releases: Vec<NormalizedRelease>) -> Self {
        Self {
            repo,
            releases,
            error: None,
        }
    }

    pub fn failed(repo: RepoId, message: String) -> Self {
        Self {
            repo,
            releases: Vec::new(),
            error: Some(message),
        }
    }

    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    pub fn releases(&self) -> &[NormalizedRelease] {
        &self.releases
    }

    /// Failure detail when the fetch did not succeed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The most recent release, if the fetch returned any.
    pub fn latest(&self) -> Option<&NormalizedRelease> {
        self.releases.first()
    }

    /// Content of the latest-release container.
    pub fn latest_html(&self) -> String {
        match &self.error {
            Some(message) => render_error(message),
            None => render_latest(self.latest()),
        }
    }

    /// Entries for the version selector; empty after a failed fetch.
    pub fn options(&self) -> Vec<VersionOption> {
        version_options(&self.releases)
    }

    /// React to a selector value: `""` clears, a held index renders details.
    pub fn select(&self, value: &str) -> Selection {
        if value.is_empty() {
            return Selection::Cleared;
        }

        // Only canonical indices ("1", not "01" or "+1") name a release
        let release = value
            .parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == value)
            .and_then(|index| self.releases.get(index));

        match release {
            Some(release) => Selection::Detail(render_detail(release)),
            None => Selection::Missing,
        }
    }

    /// Full HTML document with the three page slots filled in.
    pub fn to_html(&self, selected: Option<&str>) -> String {
        let detail = match selected.map(|value| self.select(value)) {
            Some(Selection::Detail(markup)) => {
                format!(r#"<div id="selected-release-info" class="active">{}</div>"#, markup)
            }
            _ => r#"<div id="selected-release-info"></div>"#.to_string(),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{repo} releases</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
</head>
<body>
    <section class="releases">
        <h2>Latest release</h2>
        <div id="latest-release">{latest}</div>
        <h2>All versions</h2>
        <select id="version-select">{options}</select>
        {detail}
    </section>
</body>
</html>
"#,
            repo = self.repo,
            latest = self.latest_html(),
            options = render_options(&self.options()),
            detail = detail,
        )
    }
}
