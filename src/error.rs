// Error taxonomy for the picker. Everything here is recovered inside the
// current flow except `ConfigError`, which stops the program at startup.

use thiserror::Error;

/// Startup configuration problems.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TMDB_API_KEY environment variable not set")]
    MissingApiKey,
}

/// A failed round trip to the movie service.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS or timeout failure before a response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-2xx status.
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the JSON shape we expect.
    #[error("malformed response body: {0}")]
    Decode(String),
}

// reqwest puts the request URL, api key included, in its Display output.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Request(err.without_url().to_string())
    }
}

/// Why a single menu flow produced nothing to show.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("no results")]
    NoResults,

    /// A text search came back empty.
    #[error("no results for {0:?}")]
    NoMatch(String),

    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),

    #[error("empty search query")]
    EmptyQuery,

    #[error(transparent)]
    Transport(#[from] TransportError),
}
