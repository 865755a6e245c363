//! Presentation rendering.
//!
//! Produces the markup injected into the three page slots: the latest
//! release summary, the version selector and the selected release detail.

mod markup;
mod options;

pub use markup::{
    NO_BUILDS, NO_RELEASES, download_buttons, render_detail, render_error, render_latest,
    truncate_description,
};
pub use options::{VersionOption, option_label, render_options, version_options};
