//! Synchronous client for the **USGS Earthquake Catalog** event service.
//!
//! One request per call, GeoJSON output, no pagination beyond `limit` and no
//! retries: a failure is returned to the caller as is.
//!
//! Typical usage:
//! ```no_run
//! # use quake_explorer::{Client, QueryParams};
//! let client = Client::new()?;
//! let params = QueryParams::ending_now(24.0, 2.5, 20)?;
//! let quakes = client.fetch_quakes(&params)?;
//! # Ok::<(), quake_explorer::QuakeError>(())
//! ```

use crate::error::{QuakeError, Result};
use crate::geojson::parse_geojson;
use crate::models::Quake;
use crate::query::QueryParams;
use log::{debug, info};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;

/// Event service query endpoint.
pub const USGS_QUERY_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// How much of an error body is kept in [`QuakeError::HttpStatus`].
pub const BODY_EXCERPT_CHARS: usize = 300;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Client {
    /// Client for the public USGS endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(USGS_QUERY_ENDPOINT)
    }

    /// Client for another endpoint speaking the same protocol (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("quake_explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Issue the GET and return the decoded JSON body.
    ///
    /// ### Errors
    /// - [`QuakeError::Network`] when no response was received
    /// - [`QuakeError::HttpStatus`] for any status other than 200
    /// - [`QuakeError::Decode`] when the body is not JSON
    pub fn fetch(&self, params: &QueryParams) -> Result<Value> {
        let pairs = params.to_pairs();
        debug!("GET {} {:?}", self.base_url, pairs);

        let resp = self.http.get(&self.base_url).query(&pairs).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if status != StatusCode::OK {
            return Err(QuakeError::HttpStatus {
                status: status.as_u16(),
                body: excerpt(&body, BODY_EXCERPT_CHARS),
            });
        }

        serde_json::from_str(&body).map_err(QuakeError::Decode)
    }

    /// [`fetch`](Self::fetch) followed by [`parse_geojson`].
    pub fn fetch_quakes(&self, params: &QueryParams) -> Result<Vec<Quake>> {
        let data = self.fetch(params)?;
        let quakes = parse_geojson(&data)?;
        info!("parsed {} earthquakes", quakes.len());
        Ok(quakes)
    }
}

/// First `max_chars` characters of `body` (never splits a code point).
fn excerpt(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}
