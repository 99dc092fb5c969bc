use thiserror::Error;

/// Failures surfaced by the query / fetch / parse pipeline.
///
/// Malformed individual features are never reported here; they are dropped
/// by [`crate::geojson::parse_geojson`].
#[derive(Debug, Error)]
pub enum QuakeError {
    /// Bad user input (non-positive hours or limit). No request is made.
    #[error("{0}")]
    Validation(String),

    /// DNS, connect, TLS or timeout failure before a response arrived.
    #[error("network error while calling USGS API: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with something other than HTTP 200.
    #[error("USGS API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The 200 response body was not valid JSON.
    #[error("USGS API response was not valid JSON")]
    Decode(#[source] serde_json::Error),

    /// The JSON document does not have the expected top-level shape.
    #[error("unexpected response: {0}")]
    Schema(String),
}

pub type Result<T, E = QuakeError> = std::result::Result<T, E>;
