use anyhow::{Context, Result};

use crate::{
    page::ReleasePage,
    provider::{Provider, RepoId},
    runtime::Runtime,
};

/// Print one `"<version> (<date>)"` line per release, or the normalized
/// releases as JSON.
#[tracing::instrument(skip(runtime, provider))]
pub async fn list<R: Runtime, P: Provider + ?Sized>(
    runtime: &R,
    provider: &P,
    repo: &RepoId,
    json: bool,
) -> Result<()> {
    let page = ReleasePage::load(provider, repo).await;
    if let Some(message) = page.error() {
        anyhow::bail!("Error loading releases: {}", message);
    }

    if json {
        let out = serde_json::to_string_pretty(page.releases())
            .context("Failed to serialize releases")?;
        return runtime.print(&out);
    }

    if page.releases().is_empty() {
        return runtime.print("No releases available on GitHub yet.");
    }

    let lines: Vec<String> = page
        .options()
        .into_iter()
        .map(|option| option.label)
        .collect();
    runtime.print(&lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FetchError;
    use crate::provider::{MockProvider, Release, ReleaseAsset};
    use crate::runtime::MockRuntime;
    use reqwest::StatusCode;

    fn repo() -> RepoId {
        "owner/repo".parse().unwrap()
    }

    fn provider() -> MockProvider {
        let mut provider = MockProvider::new();
        provider.expect_get_releases().returning(|_| {
            Ok(vec![
                Release {
                    tag: "v2.0.0".into(),
                    published_at: "2024-02-01T00:00:00Z".into(),
                    assets: vec![ReleaseAsset {
                        name: "game.AppImage".into(),
                        download_url: Some("https://dl/game.AppImage".into()),
                    }],
                    ..Default::default()
                },
                Release {
                    tag: "v1.0.0".into(),
                    published_at: "2024-01-01T00:00:00Z".into(),
                    ..Default::default()
                },
            ])
        });
        provider
    }

    #[tokio::test]
    async fn test_list_plain() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_print()
            .times(1)
            .withf(|out: &str| out == "v2.0.0 (2/1/2024)\nv1.0.0 (1/1/2024)")
            .returning(|_| Ok(()));

        list(&runtime, &provider(), &repo(), false).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_json() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_print()
            .times(1)
            .withf(|out: &str| {
                let value: serde_json::Value = serde_json::from_str(out).unwrap();
                value[0]["version"] == "v2.0.0"
                    && value[0]["platforms"]["linux"] == "https://dl/game.AppImage"
                    && value[0]["platforms"]["windows"].is_null()
                    && value[1]["description"] == "No description provided."
            })
            .returning(|_| Ok(()));

        list(&runtime, &provider(), &repo(), true).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_empty() {
        let mut provider = MockProvider::new();
        provider.expect_get_releases().returning(|_| Ok(Vec::new()));

        let mut runtime = MockRuntime::new();
        runtime
            .expect_print()
            .times(1)
            .withf(|out: &str| out == "No releases available on GitHub yet.")
            .returning(|_| Ok(()));

        list(&runtime, &provider, &repo(), false).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_fetch_error() {
        let mut provider = MockProvider::new();
        provider
            .expect_get_releases()
            .returning(|_| Err(FetchError::Status(StatusCode::FORBIDDEN).into()));

        let mut runtime = MockRuntime::new();
        runtime.expect_print().never();

        let err = list(&runtime, &provider, &repo(), false).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error loading releases: GitHub API error! status: 403"
        );
    }
}
