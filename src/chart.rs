//! Chart presentation seam.
//!
//! The pipeline only knows about [`ChartRenderer`]; the plotters-backed
//! implementation lives in `crate::viz` (feature `chart`) and is handed in by
//! the caller.

use crate::models::Quake;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub const NO_DATA: &str = "No data to plot.";

/// Something that can draw magnitude over time.
pub trait ChartRenderer {
    /// Draw `quakes` (chronological order). Write an image to `save_path` if
    /// given; open a window only when `show` is true.
    fn render(
        &self,
        quakes: &[Quake],
        title: &str,
        save_path: Option<&Path>,
        show: bool,
    ) -> Result<()>;
}

/// Render through `renderer`, reporting to `out`.
///
/// An empty list prints [`NO_DATA`] and never reaches the renderer. With both
/// a save path and `show`, the file is written and confirmed first and the
/// window is opened by a second, display-only call; the window blocks until
/// it is closed.
pub fn plot_quakes<W: Write>(
    out: &mut W,
    renderer: &dyn ChartRenderer,
    quakes: &[Quake],
    title: &str,
    save_path: Option<&Path>,
    show: bool,
) -> Result<()> {
    if quakes.is_empty() {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    }

    match save_path {
        Some(path) => {
            renderer.render(quakes, title, Some(path), false)?;
            writeln!(out, "Saved plot to: {}", path.display())?;
            out.flush()?;
            if show {
                renderer.render(quakes, title, None, true)?;
            }
        }
        None => renderer.render(quakes, title, None, show)?,
    }
    Ok(())
}

/// `Earthquakes past 24h (min M2.5)`
pub fn chart_title(hours: f64, min_magnitude: f64) -> String {
    format!("Earthquakes past {hours}h (min M{min_magnitude})")
}
