//! HTTP client module with status-based error handling.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{FetchError, check_status};
