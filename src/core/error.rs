use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum GsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unsuccessful status without a structured body.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A structured rejection from the backend, e.g. `503 "Model overloaded"`
    /// or `401 "Invalid credentials"`. Displays the backend message verbatim
    /// so callers can surface it to users unchanged.
    #[error("{message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The `message` field of the response body.
        message: String,
    },

    /// The data received from the API was in an unexpected format or was
    /// missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// No bearer token is available for an authenticated endpoint.
    #[error("Authentication required: {0}")]
    Auth(String),

    /// The operation was cancelled via a [`CancelToken`](crate::CancelToken).
    /// Never retried.
    #[error("operation cancelled")]
    Cancelled,

    /// The prompt was empty after trimming whitespace.
    #[error("prompt must not be empty")]
    InvalidPrompt,
}

impl GsError {
    /// Whether this error represents a cooperative cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
