//! Error taxonomy for failed fetches.

use reqwest::{Response, StatusCode};

/// A request that reached the server but came back with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The API answered with an error status (4xx or 5xx).
    Status(StatusCode),
}

impl FetchError {
    /// Numeric HTTP status carried by this error.
    pub fn status(&self) -> u16 {
        match self {
            FetchError::Status(status) => status.as_u16(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Status(status) => {
                write!(f, "GitHub API error! status: {}", status.as_u16())
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Passes a successful response through and turns any other status into a
/// [`FetchError`].
pub fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status(status))
    }
}
