use crate::models::Quake;
use serde::{Deserialize, Serialize};

/// Summary statistics over one batch of earthquakes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min_magnitude: f64,
    pub max_magnitude: f64,
    pub mean_magnitude: f64,
    pub median_magnitude: f64,
    pub mean_depth_km: f64,
    /// First event with the maximum magnitude, in input order.
    pub strongest: Quake,
}

/// Compute magnitude and depth statistics; `None` for an empty batch.
pub fn magnitude_summary(quakes: &[Quake]) -> Option<Summary> {
    let strongest = quakes
        .iter()
        .reduce(|best, q| if q.magnitude > best.magnitude { q } else { best })?
        .clone();

    let mut mags: Vec<f64> = quakes.iter().map(|q| q.magnitude).collect();
    mags.sort_by(f64::total_cmp);
    let count = mags.len();
    let median = if count % 2 == 1 {
        mags[count / 2]
    } else {
        (mags[count / 2 - 1] + mags[count / 2]) / 2.0
    };

    Some(Summary {
        count,
        min_magnitude: mags[0],
        max_magnitude: mags[count - 1],
        mean_magnitude: mags.iter().sum::<f64>() / count as f64,
        median_magnitude: median,
        mean_depth_km: quakes.iter().map(|q| q.depth_km).sum::<f64>() / count as f64,
        strongest,
    })
}
