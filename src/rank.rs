use crate::models::Quake;
use std::fmt;
use std::str::FromStr;

/// Display ordering for the ranked listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent first.
    Time,
    /// Largest magnitude first.
    #[default]
    Magnitude,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Time => "time",
            SortOrder::Magnitude => "magnitude",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "time" => Ok(SortOrder::Time),
            "magnitude" => Ok(SortOrder::Magnitude),
            other => Err(format!(
                "unknown sort order '{other}', expected 'time' or 'magnitude'"
            )),
        }
    }
}

/// Descending sort by the chosen key. Stable: ties keep their input order.
pub fn sort_quakes(quakes: &[Quake], order: SortOrder) -> Vec<Quake> {
    let mut out = quakes.to_vec();
    match order {
        SortOrder::Time => out.sort_by(|a, b| b.time.cmp(&a.time)),
        SortOrder::Magnitude => out.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude)),
    }
    out
}

/// Oldest first, for plotting along a time axis.
pub fn chronological(quakes: &[Quake]) -> Vec<Quake> {
    let mut out = quakes.to_vec();
    out.sort_by_key(|q| q.time);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_parses_case_insensitively() {
        assert_eq!("TIME".parse::<SortOrder>().unwrap(), SortOrder::Time);
        assert_eq!("magnitude".parse::<SortOrder>().unwrap(), SortOrder::Magnitude);
        assert!("depth".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::Magnitude);
    }
}
