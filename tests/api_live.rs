//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use quake_explorer::{Client, QueryParams, SortOrder, rank};

#[test]
fn fetch_last_day() {
    let cli = Client::new().unwrap();
    let params = QueryParams::ending_now(24.0, 2.5, 20).unwrap();
    let quakes = cli.fetch_quakes(&params).unwrap();
    assert!(quakes.len() <= 20);
    assert!(quakes.iter().all(|q| q.magnitude >= 2.5));
    assert!(
        quakes
            .iter()
            .all(|q| q.time >= params.start - chrono::TimeDelta::minutes(1))
    );
}

#[test]
fn fetch_and_rank_by_time() {
    let cli = Client::new().unwrap();
    let quakes = cli
        .fetch_quakes(&QueryParams::ending_now(168.0, 4.5, 50).unwrap())
        .unwrap();
    let ranked = rank::sort_quakes(&quakes, SortOrder::Time);
    for w in ranked.windows(2) {
        assert!(w[0].time >= w[1].time);
    }
}
