//! Release normalization.
//!
//! Turns the provider's raw release records into [`NormalizedRelease`]
//! values: a version label, a short date, a description with a fallback, a
//! per-platform download map and the release page URL.

mod normalize;
mod platform;

pub use normalize::{INVALID_DATE, NO_DESCRIPTION, NormalizedRelease, format_date, normalize};
pub use platform::{Platform, PlatformMap, RULES, classify, platform_of};
