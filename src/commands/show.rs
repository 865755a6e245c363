use anyhow::Result;
use log::debug;

use crate::{
    page::{ReleasePage, Selection},
    provider::{Provider, RepoId},
    runtime::Runtime,
};

/// Print the detail panel of the release at `index` in the listing.
#[tracing::instrument(skip(runtime, provider))]
pub async fn show<R: Runtime, P: Provider + ?Sized>(
    runtime: &R,
    provider: &P,
    repo: &RepoId,
    index: &str,
) -> Result<()> {
    let page = ReleasePage::load(provider, repo).await;
    if let Some(message) = page.error() {
        anyhow::bail!("Error loading releases: {}", message);
    }

    debug!("Selecting release {} of {}", index, page.releases().len());
    match page.select(index) {
        Selection::Detail(markup) => runtime.print(&markup),
        Selection::Cleared | Selection::Missing => {
            anyhow::bail!(
                "No release at index '{}' ({} releases available)",
                index,
                page.releases().len()
            )
        }
    }
}
