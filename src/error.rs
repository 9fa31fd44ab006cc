use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Remote answered with a non-success status
    #[error("request to {url} failed with status {status}")]
    Fetch { url: String, status: StatusCode },

    /// Request never completed or its body could not be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Malformed input, either view state from the query string or a remote
/// payload
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("missing query parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("query string is not valid utf-8 once percent-decoded")]
    InvalidUtf8,

    #[error("malformed query string: {0}")]
    Query(#[from] serde_urlencoded::de::Error),

    #[error("malformed abilities json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
