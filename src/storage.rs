use crate::models::Quake;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix cells a spreadsheet would evaluate as a formula with a single quote.
fn csv_safe(cell: &str) -> Cow<'_, str> {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => Cow::Owned(format!("'{cell}")),
        _ => Cow::Borrowed(cell),
    }
}

/// Save earthquakes as CSV with header. Times are RFC 3339 UTC; text cells
/// are guarded against formula injection.
pub fn save_csv<P: AsRef<Path>>(quakes: &[Quake], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.serialize((
        "magnitude", "place", "time_utc", "url", "lon", "lat", "depth_km",
    ))?;
    for q in quakes {
        wtr.serialize((
            q.magnitude,
            csv_safe(&q.place),
            q.time.to_rfc3339(),
            csv_safe(&q.url),
            q.lon,
            q.lat,
            q.depth_km,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save earthquakes as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(quakes: &[Quake], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(quakes)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let qs = vec![Quake {
            magnitude: 3.1,
            place: "5km S of Volcano, Hawaii".into(),
            time: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
            url: String::new(),
            lon: -155.2,
            lat: 19.4,
            depth_km: 1.2,
        }];
        save_csv(&qs, &csvp).unwrap();
        save_json(&qs, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }

    #[test]
    fn csv_safe_only_touches_formula_starters() {
        assert_eq!(csv_safe("=1+1"), "'=1+1");
        assert_eq!(csv_safe("@cmd"), "'@cmd");
        assert_eq!(csv_safe("10km NW of X"), "10km NW of X");
        assert_eq!(csv_safe(""), "");
    }
}
