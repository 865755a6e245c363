//! HTML fragments for the release panels.
//!
//! Fetched text is inserted as-is; the page trusts its release source.

use crate::release::{NormalizedRelease, PlatformMap};

/// Shown in the latest-release container when the repository has no releases.
pub const NO_RELEASES: &str = "<p>No releases available on GitHub yet.</p>";

/// Shown in place of the download row when no asset matched a platform.
pub const NO_BUILDS: &str =
    r#"<p class="no-assets">No platform-specific builds found for this release.</p>"#;

const BREAK: &str = "<br>";
const ELLIPSIS: &str = "...";
const MAX_PREVIEW_LINES: usize = 3;

/// Keeps the first three lines of a description, joined by `<br>`, and
/// appends `...` when the text has more than three `\n`-separated lines.
///
/// Both `\r\n` and `\n` end a preview line, but only `\n` is counted when
/// deciding on the ellipsis.
pub fn truncate_description(text: &str) -> String {
    let converted = text.replace("\r\n", BREAK).replace('\n', BREAK);
    let mut preview = converted
        .split(BREAK)
        .take(MAX_PREVIEW_LINES)
        .collect::<Vec<_>>()
        .join(BREAK);

    if text.split('\n').count() > MAX_PREVIEW_LINES {
        preview.push_str(ELLIPSIS);
    }
    preview
}

/// One download link per populated platform, Windows, macOS then Linux.
pub fn download_buttons(platforms: &PlatformMap) -> String {
    if platforms.is_empty() {
        return NO_BUILDS.to_string();
    }

    platforms
        .iter()
        .map(|(platform, url)| {
            format!(
                r#"<a href="{}" class="btn-download"><i class="fab {}"></i> {}</a>"#,
                url,
                platform.icon(),
                platform.label()
            )
        })
        .collect()
}

/// Summary panel for the most recent release.
pub fn render_latest(release: Option<&NormalizedRelease>) -> String {
    let Some(release) = release else {
        return NO_RELEASES.to_string();
    };

    format!(
        r#"
    <div class="latest-meta">
        <span class="version-badge">{version}</span>
        <div class="gh-description">{description}</div>
    </div>
    <div class="download-buttons">
        {buttons}
    </div>
    <a href="{url}" target="_blank" class="view-on-github">View on GitHub</a>
"#,
        version = release.version,
        description = truncate_description(&release.description),
        buttons = download_buttons(&release.platforms),
        url = release.url,
    )
}

/// Detail panel for a release picked from the version selector.
pub fn render_detail(release: &NormalizedRelease) -> String {
    format!(
        r#"
    <h3>Version {version}</h3>
    <p class="release-date">Released on {date}</p>
    <div class="release-desc">{description}</div>
    <div class="archive-downloads">
        <h4>Downloads:</h4>
        <div class="featured-download">
            {buttons}
        </div>
    </div>
"#,
        version = release.version,
        date = release.date,
        description = release.description.replace('\n', BREAK),
        buttons = download_buttons(&release.platforms),
    )
}

/// Message placed in the latest-release container when loading failed.
pub fn render_error(message: &str) -> String {
    format!("<p>Error loading releases: {}</p>", message)
}
