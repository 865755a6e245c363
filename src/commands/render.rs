use anyhow::Result;
use log::{debug, info};
use std::path::Path;

use crate::{
    page::ReleasePage,
    provider::{Provider, RepoId},
    runtime::Runtime,
};

/// Write the release page as an HTML document.
///
/// A failed fetch does not fail the command; the page shows the error in
/// the latest-release panel instead.
#[tracing::instrument(skip(runtime, provider))]
pub async fn render<R: Runtime, P: Provider + ?Sized>(
    runtime: &R,
    provider: &P,
    repo: &RepoId,
    output: Option<&Path>,
    selected: Option<&str>,
) -> Result<()> {
    let page = ReleasePage::load(provider, repo).await;
    let html = page.to_html(selected);

    match output {
        Some(path) => {
            debug!("Writing page to {}", path.display());
            runtime.write(path, html.as_bytes())?;
            info!("Wrote release page for {} to {}", repo, path.display());
        }
        None => runtime.print(&html)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FetchError;
    use crate::provider::{MockProvider, Release};
    use crate::runtime::MockRuntime;
    use reqwest::StatusCode;

    fn repo() -> RepoId {
        "owner/repo".parse().unwrap()
    }

    #[tokio::test]
    async fn test_render_to_file() {
        let mut provider = MockProvider::new();
        provider.expect_get_releases().returning(|_| {
            Ok(vec![Release {
                tag: "v1.0.0".into(),
                ..Default::default()
            }])
        });

        let mut runtime = MockRuntime::new();
        runtime
            .expect_write()
            .times(1)
            .withf(|path: &Path, contents: &[u8]| {
                let html = String::from_utf8_lossy(contents);
                path == Path::new("/tmp/page.html")
                    && html.contains(r#"<span class="version-badge">v1.0.0</span>"#)
            })
            .returning(|_, _| Ok(()));
        runtime.expect_print().never();

        render(
            &runtime,
            &provider,
            &repo(),
            Some(Path::new("/tmp/page.html")),
            None,
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_render_fetch_error_still_succeeds() {
        let mut provider = MockProvider::new();
        provider
            .expect_get_releases()
            .returning(|_| Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR).into()));

        let mut runtime = MockRuntime::new();
        runtime
            .expect_print()
            .times(1)
            .withf(|html: &str| {
                html.contains("<p>Error loading releases: GitHub API error! status: 500</p>")
            })
            .returning(|_| Ok(()));

        render(&runtime, &provider, &repo(), None, None).await.unwrap();
    }
}
