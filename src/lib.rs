//! quake_explorer
//!
//! A small Rust library for pulling recent earthquakes from the USGS Earthquake
//! Catalog (GeoJSON event service), ranking them, and charting magnitude over
//! time. Pairs with the `quakes` CLI.
//!
//! ### Features
//! - Query a lookback window with a minimum magnitude and result limit
//! - Lenient per-feature decoding: malformed events are skipped, not fatal
//! - Rank by magnitude or recency, print a numbered listing
//! - Magnitude summary statistics, CSV/JSON export
//! - PNG/SVG chart of magnitude over time (`chart` feature), optional native
//!   window (`viewer` feature)
//!
//! ### Example
//! ```no_run
//! use quake_explorer::{Client, QueryParams, SortOrder, rank, report};
//!
//! let client = Client::new()?;
//! let quakes = client.fetch_quakes(&QueryParams::ending_now(24.0, 2.5, 20)?)?;
//! let ranked = rank::sort_quakes(&quakes, SortOrder::Magnitude);
//! report::print_results(&mut std::io::stdout(), &ranked, 10)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod chart;
pub mod error;
pub mod geojson;
pub mod models;
pub mod query;
pub mod rank;
pub mod report;
pub mod stats;
pub mod storage;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(feature = "chart")]
pub mod viz;

pub use api::Client;
pub use chart::ChartRenderer;
pub use error::QuakeError;
pub use models::Quake;
pub use query::QueryParams;
pub use rank::SortOrder;
