//! CLI subcommands.
//!
//! Each command loads the release page once through a [`Provider`] and
//! writes its output through a [`Runtime`].
//!
//! [`Provider`]: crate::provider::Provider
//! [`Runtime`]: crate::runtime::Runtime

mod list;
mod render;
mod show;

pub use list::list;
pub use render::render;
pub use show::show;
