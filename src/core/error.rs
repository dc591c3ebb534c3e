use thiserror::Error;

/// The primary error type for all fallible client calls in this crate.
///
/// The store never surfaces this type directly; it folds failures into
/// [`OperationError`](crate::store::OperationError) values.
#[derive(Debug, Error)]
pub enum StocksError {
    /// An error occurred during an HTTP request (connect failure, timeout, body read).
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

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The client was configured with values it cannot use (e.g. a base URL that cannot hold paths).
    #[error("Invalid client configuration: {0}")]
    Config(String),
}
