use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Place shown when the feed has no (or an empty) place description.
pub const UNKNOWN_PLACE: &str = "(unknown location)";

/// One earthquake event, normalized from a GeoJSON feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quake {
    pub magnitude: f64,
    pub place: String,
    pub time: DateTime<Utc>,
    pub url: String,
    pub lon: f64,
    pub lat: f64,
    pub depth_km: f64,
}

/// Raw feature from the `features` array.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

/// `feature.properties`. Only the fields this crate reads are declared.
#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    #[serde(default, deserialize_with = "de_opt_f64_from_string_or_number")]
    pub mag: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub place: Option<String>,
    /// Epoch milliseconds.
    #[serde(default, deserialize_with = "de_opt_i64_from_string_or_number")]
    pub time: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub url: Option<String>,
}

/// `feature.geometry`; coordinates are `[lon, lat, depth_km, ..]`.
///
/// Kept raw: only the first three entries are coerced, anything after
/// them is never looked at.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<Value>,
}

/// A finite float that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lenient(pub f64);

impl<'de> Deserialize<'de> for Lenient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(F64Visitor).map(Lenient)
    }
}

impl Feature {
    /// Normalize into a [`Quake`]; `None` when magnitude, time, or a
    /// coordinate is missing or out of range.
    pub fn into_quake(self) -> Option<Quake> {
        let Properties {
            mag,
            place,
            time,
            url,
        } = self.properties;
        let magnitude = mag?;
        let time = DateTime::from_timestamp_millis(time?)?;
        let (lon, lat, depth_km) = match self.geometry.coordinates.as_slice() {
            [lon, lat, depth, ..] => (coordinate(lon)?, coordinate(lat)?, coordinate(depth)?),
            _ => return None,
        };
        let place = place
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| UNKNOWN_PLACE.to_string());
        Some(Quake {
            magnitude,
            place,
            time,
            url: url.unwrap_or_default(),
            lon,
            lat,
            depth_km,
        })
    }
}

fn coordinate(raw: &Value) -> Option<f64> {
    Lenient::deserialize(raw).ok().map(|l| l.0)
}

fn finite<E: serde::de::Error>(v: f64) -> Result<f64, E> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(E::custom("non-finite number"))
    }
}

struct F64Visitor;

impl<'de> serde::de::Visitor<'de> for F64Visitor {
    type Value = f64;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "a number or a string holding a number")
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        finite(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v as f64)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v as f64)
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        s.trim().parse::<f64>().map_err(E::custom).and_then(finite)
    }
}

/// Serde helper: `null`/absent -> `None`, number or numeric string -> `Some`.
fn de_opt_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Lenient>::deserialize(deserializer).map(|v| v.map(|l| l.0))
}

/// Serde helper for free text: strings as is, numbers and booleans in their
/// JSON spelling; `null`, objects and arrays fall back to `None`.
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Serde helper for epoch milliseconds: integer, float (truncated) or numeric string.
fn de_opt_i64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "an integer, a float, or a string holding an integer")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(v).map(Some).map_err(E::custom)
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.is_finite() && v.abs() < i64::MAX as f64 {
                Ok(Some(v.trunc() as i64))
            } else {
                Err(E::custom("epoch milliseconds out of range"))
            }
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<i64>().map(Some).map_err(E::custom)
        }
    }

    deserializer.deserialize_option(I64Visitor)
}
