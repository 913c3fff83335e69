use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON response")]
    JsonParse(#[from] serde_json::Error),

    #[error("Unexpected response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("No location found for ZIP code '{0}'")]
    NoLocationFound(String),

    #[error("Failed to read cache file '{0}'")]
    CacheRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write cache file '{0}'")]
    CacheWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode cache data from '{0}'")]
    CacheDecode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode cache data")]
    CacheEncode(#[source] Box<bincode::error::EncodeError>),
}

impl SourceError {
    /// Maps a failed `send` or `error_for_status` to [`SourceError::HttpStatus`] when the server
    /// answered, or [`SourceError::NetworkRequest`] otherwise.
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => SourceError::HttpStatus {
                url: url.to_string(),
                status,
                source: error,
            },
            None => SourceError::NetworkRequest(url.to_string(), error),
        }
    }

    /// `true` for failures that a stale cache entry may paper over.
    pub(crate) fn is_transport(&self) -> bool {
        matches!(
            self,
            SourceError::NetworkRequest(..) | SourceError::HttpStatus { .. }
        )
    }
}
