use serde::Serialize;
use std::fmt;

use crate::provider::ReleaseAsset;

/// Target operating system of a downloadable build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    /// All platforms, in display order.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Mac, Platform::Linux];

    /// Stable key used in serialized maps.
    pub fn key(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        }
    }

    /// Human readable button label.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Mac => "macOS",
            Platform::Linux => "Linux",
        }
    }

    /// Font Awesome brand icon class.
    pub fn icon(self) -> &'static str {
        match self {
            Platform::Windows => "fa-windows",
            Platform::Mac => "fa-apple",
            Platform::Linux => "fa-linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn is_windows(name: &str) -> bool {
    name.contains("win") || name.ends_with(".exe") || name.ends_with(".msi")
}

fn is_mac(name: &str) -> bool {
    name.contains("mac")
        || name.contains("osx")
        || name.contains("apple")
        || name.ends_with(".dmg")
}

fn is_linux(name: &str) -> bool {
    name.contains("linux") || name.ends_with(".tar.gz") || name.ends_with(".appimage")
}

/// Ordered classification rules over lower-cased file names. The first
/// predicate that matches decides the platform.
pub const RULES: [(fn(&str) -> bool, Platform); 3] = [
    (is_windows, Platform::Windows),
    (is_mac, Platform::Mac),
    (is_linux, Platform::Linux),
];

/// Platform a single asset file name belongs to, if any.
pub fn platform_of(file_name: &str) -> Option<Platform> {
    let name = file_name.to_lowercase();
    RULES
        .iter()
        .find(|(matches, _)| matches(name.as_str()))
        .map(|(_, platform)| *platform)
}

/// One optional download URL per platform.
///
/// The key set is fixed by construction; serializing always yields exactly
/// `windows`, `mac` and `linux`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlatformMap {
    pub windows: Option<String>,
    pub mac: Option<String>,
    pub linux: Option<String>,
}

impl PlatformMap {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Windows => self.windows.as_deref(),
            Platform::Mac => self.mac.as_deref(),
            Platform::Linux => self.linux.as_deref(),
        }
    }

    pub fn set(&mut self, platform: Platform, url: String) {
        let slot = match platform {
            Platform::Windows => &mut self.windows,
            Platform::Mac => &mut self.mac,
            Platform::Linux => &mut self.linux,
        };
        *slot = Some(url);
    }

    /// Populated entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|url| (p, url)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Maps release assets onto platforms. Later assets overwrite earlier ones
/// for the same platform; unmatched assets and assets without a download
/// URL are ignored.
pub fn classify(assets: &[ReleaseAsset]) -> PlatformMap {
    let mut platforms = PlatformMap::default();
    for asset in assets {
        if let (Some(platform), Some(url)) = (platform_of(&asset.name), &asset.download_url) {
            platforms.set(platform, url.clone());
        }
    }
    platforms
}
