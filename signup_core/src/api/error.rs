use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while processing requests
#[derive(Debug, Error)]
pub enum Error {
    /// The request didn't complete, for example because nothing was listening
    /// on the endpoint or the connection dropped.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
