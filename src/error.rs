use std::io;

/// Why a single request produced no cards. The collector logs these and moves
/// on; they never end the run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} for URL: {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that end the run with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No cards fetched! Check your internet connection.")]
    NoCards,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to serialize card list: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}
