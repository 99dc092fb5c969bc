//! Decode a USGS GeoJSON `FeatureCollection` into [`Quake`] records.
//!
//! The collection itself must be well formed (`features` must be an array);
//! individual features that do not decode are dropped so one bad entry never
//! aborts the batch.

use crate::error::{QuakeError, Result};
use crate::models::{Feature, Quake};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Parse every usable feature, keeping the order the API returned them in.
///
/// ### Errors
/// [`QuakeError::Schema`] when `features` is missing or not an array.
pub fn parse_geojson(data: &Value) -> Result<Vec<Quake>> {
    let features = data
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| QuakeError::Schema("'features' missing or not a list".into()))?;

    let quakes: Vec<Quake> = features.iter().filter_map(decode_feature).collect();

    let skipped = features.len() - quakes.len();
    if skipped > 0 {
        debug!("skipped {skipped} of {} features", features.len());
    }
    Ok(quakes)
}

/// Typed decode of a single feature; `None` on any shape or value mismatch.
fn decode_feature(raw: &Value) -> Option<Quake> {
    match Feature::deserialize(raw) {
        Ok(feature) => feature.into_quake(),
        Err(e) => {
            debug!("feature does not decode: {e}");
            None
        }
    }
}
