use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlamaApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    StatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Cache I/O failed for {}: {source}", path.display())]
    CacheError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid API url: {0}")]
    UrlError(String),
}
