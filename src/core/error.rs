use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// The lenient entry points ([`crate::fetch_news`], [`crate::extract_news`]) never
/// return it; they log the failure and hand back an empty or partial list instead.
#[derive(Debug, Error)]
pub enum NewsError {
    /// An error occurred during an HTTP request (connect, read timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with something other than `200 OK`.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, without its query string.
        url: String,
    },

    /// The response body was not valid JSON, or a value had the wrong JSON type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document was valid JSON but did not have the expected layout.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// The runtime backing the blocking call path could not be started.
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}
