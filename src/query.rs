//! Query window and filter parameters for the USGS event service.

use crate::error::{QuakeError, Result};
use chrono::{DateTime, TimeDelta, Utc};

/// Output format requested from the event service.
pub const FORMAT_GEOJSON: &str = "geojson";

/// ISO-8601 without a timezone suffix, seconds precision (USGS reads it as UTC).
pub fn isoformat_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Reject a non-positive (or non-finite) lookback window.
pub fn validate_hours(hours: f64) -> Result<f64> {
    if hours.is_finite() && hours > 0.0 {
        Ok(hours)
    } else {
        Err(QuakeError::Validation("--hours must be > 0".into()))
    }
}

/// Reject a zero result count. `flag` names the option in the message.
pub fn validate_limit(limit: u32, flag: &str) -> Result<u32> {
    if limit > 0 {
        Ok(limit)
    } else {
        Err(QuakeError::Validation(format!("{flag} must be > 0")))
    }
}

/// Time window plus filters for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub min_magnitude: f64,
    pub limit: u32,
}

impl QueryParams {
    /// Window of `hours` ending at `end`.
    ///
    /// `hours` is expected to be validated already; the window is computed at
    /// millisecond resolution.
    ///
    /// ### Errors
    /// [`QuakeError::Validation`] when the window reaches past the range
    /// `DateTime<Utc>` can represent.
    pub fn new(end: DateTime<Utc>, hours: f64, min_magnitude: f64, limit: u32) -> Result<Self> {
        let too_large = || QuakeError::Validation("--hours is too large".into());
        let millis = (hours * 3_600_000.0).round();
        if !(millis.abs() < i64::MAX as f64) {
            return Err(too_large());
        }
        let start = TimeDelta::try_milliseconds(millis as i64)
            .and_then(|window| end.checked_sub_signed(window))
            .ok_or_else(too_large)?;
        Ok(Self {
            start,
            end,
            min_magnitude,
            limit,
        })
    }

    /// Window of `hours` ending at the current UTC time.
    pub fn ending_now(hours: f64, min_magnitude: f64, limit: u32) -> Result<Self> {
        Self::new(Utc::now(), hours, min_magnitude, limit)
    }

    /// Query string pairs in the order the service documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("format", FORMAT_GEOJSON.to_string()),
            ("starttime", isoformat_utc(self.start)),
            ("endtime", isoformat_utc(self.end)),
            ("minmagnitude", self.min_magnitude.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}
