//! Failure kinds of a calendar fetch.

use thiserror::Error;

/// Each kind is terminal to a run. Display is the underlying cause's text, unchanged.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, or any other failure before the body streams.
    #[error(transparent)]
    Transport(curl::Error),
    /// The body stream broke or ended early.
    #[error(transparent)]
    BodyRead(curl::Error),
    /// The body is not JSON, or not shaped like a calendar response.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
