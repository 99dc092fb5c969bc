#![cfg(feature = "chart")]

use chrono::DateTime;
use quake_explorer::chart::{ChartRenderer, plot_quakes};
use quake_explorer::viz::PlottersChart;
use quake_explorer::Quake;
use std::fs;
use tempfile::tempdir;

fn sample_quakes() -> Vec<Quake> {
    [(0, 2.7), (45, 3.4), (90, 5.1), (300, 2.9), (600, 4.2)]
        .iter()
        .map(|&(minutes, magnitude)| Quake {
            magnitude,
            place: "Test Region".into(),
            time: DateTime::from_timestamp_millis(1_700_000_000_000 + minutes * 60_000).unwrap(),
            url: String::new(),
            lon: 142.0,
            lat: 38.0,
            depth_km: 20.0,
        })
        .collect()
}

#[test]
fn png_is_written_headless() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quakes.png");
    PlottersChart::new(800, 480)
        .render(&sample_quakes(), "Earthquakes past 24h (min M2.5)", Some(&path), false)
        .unwrap();
    let bytes = fs::read(&path).expect("file created");
    assert!(bytes.starts_with(b"\x89PNG"), "not a PNG");
}

#[test]
fn svg_is_chosen_by_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quakes.svg");
    PlottersChart::default()
        .render(&sample_quakes(), "SVG chart", Some(&path), false)
        .unwrap();
    let txt = fs::read_to_string(&path).unwrap();
    assert!(txt.contains("<svg"));
    assert!(txt.contains("Magnitude"));
}

#[test]
fn single_event_renders() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("one.png");
    let one = vec![sample_quakes().remove(0)];
    PlottersChart::new(640, 400)
        .render(&one, "One", Some(&path), false)
        .unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn no_path_and_no_show_touches_nothing() {
    PlottersChart::default()
        .render(&sample_quakes(), "Nothing", None, false)
        .unwrap();
}

#[test]
fn empty_points_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.png");
    let e = PlottersChart::default().render(&[], "Empty", Some(&path), false);
    assert!(e.is_err());
    assert!(!path.exists());
}

#[test]
fn plot_quakes_confirms_saved_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("confirmed.png");
    let mut out = Vec::new();
    plot_quakes(
        &mut out,
        &PlottersChart::default(),
        &sample_quakes(),
        "Confirmed",
        Some(&path),
        false,
    )
    .unwrap();
    let msg = String::from_utf8(out).unwrap();
    assert_eq!(msg, format!("Saved plot to: {}\n", path.display()));
    assert!(path.exists());
}
