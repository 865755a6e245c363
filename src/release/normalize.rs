use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::provider::{PublishedAt, Release};

use super::platform::{PlatformMap, classify};

/// Placeholder used when a release has no notes.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Rendered in place of a date that is absent or cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// A release shaped for rendering. Built once per fetch and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRelease {
    pub version: String,
    pub date: String,
    pub description: String,
    pub platforms: PlatformMap,
    pub url: String,
}

impl From<&Release> for NormalizedRelease {
    fn from(release: &Release) -> Self {
        let description = match release.body.as_deref() {
            Some(body) if !body.is_empty() => body.to_string(),
            _ => NO_DESCRIPTION.to_string(),
        };

        NormalizedRelease {
            version: release.tag.clone(),
            date: format_date(&release.published_at),
            description,
            platforms: classify(&release.assets),
            url: release.html_url.clone(),
        }
    }
}

/// Normalizes every release, keeping the input order.
pub fn normalize(releases: &[Release]) -> Vec<NormalizedRelease> {
    releases.iter().map(NormalizedRelease::from).collect()
}

/// Short US-style calendar date (`M/D/YYYY`) in UTC.
///
/// An explicit `null` timestamp counts as the Unix epoch.
pub fn format_date(published_at: &PublishedAt) -> String {
    let parsed = match published_at {
        PublishedAt::Value(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        PublishedAt::Null => DateTime::from_timestamp(0, 0),
        PublishedAt::Missing => None,
    };
    parsed
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
