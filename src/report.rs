//! Plain-text ranked listing.

use crate::models::Quake;
use std::io::{self, Write};

pub const NO_MATCHES: &str = "No earthquakes matched your filters.";

/// `M4.8 | 2026-02-07 04:12 UTC | depth 12.3 km | 10km NW of Somewhere`
pub fn format_row(q: &Quake) -> String {
    format!(
        "M{:.1} | {} | depth {:.1} km | {}",
        q.magnitude,
        q.time.format("%Y-%m-%d %H:%M UTC"),
        q.depth_km,
        q.place
    )
}

/// Write the numbered listing of at most `display_limit` rows.
///
/// `display_limit` is independent of how many records were fetched.
pub fn print_results<W: Write>(
    out: &mut W,
    quakes: &[Quake],
    display_limit: usize,
) -> io::Result<()> {
    if quakes.is_empty() {
        writeln!(out, "{NO_MATCHES}")?;
        return Ok(());
    }

    let shown = display_limit.min(quakes.len());
    writeln!(
        out,
        "Found {} earthquakes. Showing up to {}:",
        quakes.len(),
        shown
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    for (i, q) in quakes.iter().take(shown).enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, format_row(q))?;
        if !q.url.is_empty() {
            writeln!(out, "    USGS page: {}", q.url)?;
        }
    }
    Ok(())
}
