//! Feed error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type FeedResult<T> = Result<T, FeedError>;
