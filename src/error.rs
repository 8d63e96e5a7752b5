//! Error types for the exchange-rate client.
//!
//! These never reach the screen. The app layer collapses every variant into
//! one fixed message per operation and logs the detail.

/// Failure while fetching a rate snapshot from the provider.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed rate payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(e) if e.is_timeout() => "timeout",
            FetchError::Transport(e) if e.is_connect() => "connect",
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}
