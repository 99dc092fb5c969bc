//! Plotters-backed magnitude-over-time chart: **PNG** (default) or **SVG**
//! files, plus an in-memory bitmap for the interactive window.

use crate::chart::ChartRenderer;
use crate::models::Quake;
use anyhow::{Result, anyhow, bail};
use chrono::DateTime;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

/// Series color (Office palette blue, #4472C4).
const SERIES_COLOR: RGBColor = RGBColor(68, 114, 196);

/// Smallest half-width of the time axis, so a single event still gets a range.
const MIN_TIME_PAD_SECS: i64 = 1800;

/// One-time registration for a "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

/// Chart renderer drawing with plotters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlottersChart {
    pub width: u32,
    pub height: u32,
}

impl Default for PlottersChart {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 700,
        }
    }
}

impl PlottersChart {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Write the chart to `path`; `.svg` selects SVG, anything else PNG.
    pub fn save(&self, quakes: &[Quake], title: &str, path: &Path) -> Result<()> {
        let size = (self.width, self.height);
        if path.extension().and_then(|s| s.to_str()) == Some("svg") {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_chart(root, quakes, title)
        } else {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_chart(root, quakes, title)
        }
    }

    /// Render into a packed RGB8 buffer of `width * height * 3` bytes.
    pub fn render_rgb(&self, quakes: &[Quake], title: &str) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.width as usize * self.height as usize * 3];
        {
            let root =
                BitMapBackend::with_buffer(&mut buf, (self.width, self.height)).into_drawing_area();
            draw_chart(root, quakes, title)?;
        }
        Ok(buf)
    }

    #[cfg(feature = "viewer")]
    fn show(&self, quakes: &[Quake], title: &str) -> Result<()> {
        let rgb = self.render_rgb(quakes, title)?;
        crate::viewer::show_rgb(title, self.width, self.height, rgb)
    }

    #[cfg(not(feature = "viewer"))]
    fn show(&self, _quakes: &[Quake], _title: &str) -> Result<()> {
        log::warn!("built without the `viewer` feature; not opening a chart window");
        Ok(())
    }
}

impl ChartRenderer for PlottersChart {
    fn render(
        &self,
        quakes: &[Quake],
        title: &str,
        save_path: Option<&Path>,
        show: bool,
    ) -> Result<()> {
        if quakes.is_empty() {
            bail!("no data to plot");
        }
        if let Some(path) = save_path {
            self.save(quakes, title, path)?;
        }
        if show {
            self.show(quakes, title)?;
        }
        Ok(())
    }
}

/// Padded x range in epoch seconds.
fn time_bounds(quakes: &[Quake]) -> Result<(i64, i64)> {
    let secs = quakes.iter().map(|q| q.time.timestamp());
    let min = secs.clone().min().ok_or_else(|| anyhow!("no valid times"))?;
    let max = secs.max().ok_or_else(|| anyhow!("no valid times"))?;
    let pad = ((max - min) / 20).max(MIN_TIME_PAD_SECS);
    Ok((min - pad, max + pad))
}

/// Padded y range around the observed magnitudes.
fn magnitude_bounds(quakes: &[Quake]) -> (f64, f64) {
    let (min, max) = quakes.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), q| {
        (lo.min(q.magnitude), hi.max(q.magnitude))
    });
    (min - 0.5, max + 0.5)
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, quakes: &[Quake], title: &str) -> Result<()>
where
    DB: DrawingBackend,
{
    ensure_fonts_registered();
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let (x_min, x_max) = time_bounds(quakes)?;
    let (y_min, y_max) = magnitude_bounds(quakes);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 110)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |t: &i64| {
        DateTime::from_timestamp(*t, 0)
            .map(|d| d.format("%m-%d %H:%M").to_string())
            .unwrap_or_default()
    };
    let y_label_fmt = |v: &f64| format!("{:.1}", v);

    // label_style first: it sets both axes, x_label_style then overrides x.
    chart
        .configure_mesh()
        .x_desc("Time (UTC)")
        .y_desc("Magnitude")
        .x_labels(12)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style(("sans-serif", 14))
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let series: Vec<(i64, f64)> = quakes
        .iter()
        .map(|q| (q.time.timestamp(), q.magnitude))
        .collect();

    chart
        .draw_series(LineSeries::new(
            series.iter().copied(),
            SERIES_COLOR.stroke_width(2),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    chart
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, SERIES_COLOR.filled())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake_at(ms: i64, magnitude: f64) -> Quake {
        Quake {
            magnitude,
            place: "test".into(),
            time: DateTime::from_timestamp_millis(ms).unwrap(),
            url: String::new(),
            lon: 0.0,
            lat: 0.0,
            depth_km: 0.0,
        }
    }

    #[test]
    fn single_event_still_has_a_range() {
        let qs = [quake_at(1_700_000_000_000, 3.0)];
        let (x0, x1) = time_bounds(&qs).unwrap();
        assert!(x0 < x1);
        let (y0, y1) = magnitude_bounds(&qs);
        assert_eq!((y0, y1), (2.5, 3.5));
    }

    #[test]
    fn render_rgb_fills_the_buffer() {
        let chart = PlottersChart::new(400, 300);
        let qs = [quake_at(1_700_000_000_000, 3.0), quake_at(1_700_003_600_000, 4.5)];
        let buf = chart.render_rgb(&qs, "Test").unwrap();
        assert_eq!(buf.len(), 400 * 300 * 3);
        // background is white, the series is not
        assert!(buf.iter().any(|&b| b != 255));
    }
}
