use chrono::DateTime;
use quake_explorer::rank::{chronological, sort_quakes};
use quake_explorer::{Quake, SortOrder};

fn quake(place: &str, magnitude: f64, ms: i64) -> Quake {
    Quake {
        magnitude,
        place: place.into(),
        time: DateTime::from_timestamp_millis(ms).unwrap(),
        url: String::new(),
        lon: 0.0,
        lat: 0.0,
        depth_km: 5.0,
    }
}

fn sample() -> Vec<Quake> {
    vec![
        quake("a", 3.1, 1_700_000_000_000),
        quake("b", 4.5, 1_700_000_300_000),
        quake("c", 3.1, 1_700_000_100_000),
        quake("d", 5.0, 1_700_000_050_000),
        quake("e", 4.5, 1_700_000_200_000),
        quake("f", 3.1, 1_700_000_400_000),
    ]
}

fn places(qs: &[Quake]) -> Vec<&str> {
    qs.iter().map(|q| q.place.as_str()).collect()
}

#[test]
fn magnitude_order_is_descending_and_stable() {
    let sorted = sort_quakes(&sample(), SortOrder::Magnitude);
    for w in sorted.windows(2) {
        assert!(w[0].magnitude >= w[1].magnitude);
    }
    // ties keep input order: b before e, a before c before f
    assert_eq!(places(&sorted), vec!["d", "b", "e", "a", "c", "f"]);
}

#[test]
fn time_order_is_most_recent_first() {
    let sorted = sort_quakes(&sample(), SortOrder::Time);
    for w in sorted.windows(2) {
        assert!(w[0].time >= w[1].time);
    }
    assert_eq!(places(&sorted), vec!["f", "b", "e", "c", "d", "a"]);
}

#[test]
fn equal_times_keep_input_order() {
    let qs = vec![
        quake("first", 2.0, 1_000),
        quake("second", 6.0, 1_000),
        quake("third", 4.0, 1_000),
    ];
    let sorted = sort_quakes(&qs, SortOrder::Time);
    assert_eq!(places(&sorted), vec!["first", "second", "third"]);
}

#[test]
fn chronological_is_oldest_first() {
    let sorted = chronological(&sample());
    assert_eq!(places(&sorted), vec!["a", "d", "c", "e", "b", "f"]);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(sort_quakes(&[], SortOrder::Magnitude).is_empty());
    assert!(sort_quakes(&[], SortOrder::Time).is_empty());
    assert!(chronological(&[]).is_empty());
}

#[test]
fn input_is_left_untouched() {
    let qs = sample();
    let _ = sort_quakes(&qs, SortOrder::Magnitude);
    assert_eq!(places(&qs), vec!["a", "b", "c", "d", "e", "f"]);
}
