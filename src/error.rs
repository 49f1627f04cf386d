//! Typed failures from the prayer-times provider call.

use reqwest::StatusCode;

/// What went wrong while fetching or decoding a provider response.
///
/// The message router converts every variant into the same generic
/// user-facing failure text; the detail here is for operator logs only.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(StatusCode),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}
