use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FinbotError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A response body could not be decoded as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A CSS selector could not be compiled.
    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    /// A model service rejected a request or returned something unusable.
    #[error("Inference error from `{model}`: {message}")]
    Inference {
        /// The model identifier the request was sent to.
        model: String,
        /// What went wrong.
        message: String,
    },

    /// An article URL has no matching news item in the current session.
    #[error("no news item matches article url {0}")]
    UnknownArticle(String),

    /// Configuration was missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}
