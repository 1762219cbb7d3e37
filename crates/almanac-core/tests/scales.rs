// File: crates/almanac-core/tests/scales.rs
// Purpose: Validate extent computation and linear/time scale mapping.

use almanac_core::{date_extent, extent, LinearScale, TimeScale};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn extent_identity() {
    let values = [1.0f64, 5.0, 3.0, 9.0, 2.0];
    assert_eq!(extent(&values, |v| *v), Some((1.0, 9.0)));
}

#[test]
fn extent_skips_non_finite() {
    let values = [f64::NAN, 4.0, f64::INFINITY, -2.0, f64::NEG_INFINITY];
    assert_eq!(extent(&values, |v| *v), Some((-2.0, 4.0)));
}

#[test]
fn extent_empty_or_all_invalid_is_none() {
    let empty: [f64; 0] = [];
    assert_eq!(extent(&empty, |v| *v), None);
    let bad = [f64::NAN, f64::NAN];
    assert_eq!(extent(&bad, |v| *v), None);
}

#[test]
fn date_extent_unordered_input() {
    let dates = [d(2020, 3, 5), d(2020, 1, 1), d(2020, 7, 9)];
    assert_eq!(date_extent(&dates, |x| *x), Some((d(2020, 1, 1), d(2020, 7, 9))));
}

#[test]
fn nice_rounds_outward() {
    let s = LinearScale::new((0.13, 0.87), (0.0, 1.0)).nice(10);
    assert_eq!(s.domain, (0.1, 0.9));

    let s = LinearScale::new((1.1, 10.9), (0.0, 1.0)).nice(10);
    assert_eq!(s.domain, (1.0, 11.0));
}

#[test]
fn nice_never_shrinks() {
    for &(lo, hi) in &[(0.3, 9.7), (-12.4, 103.0), (0.001, 0.009), (5.0, 5.0)] {
        let s = LinearScale::new((lo, hi), (0.0, 1.0)).nice(10);
        assert!(s.domain.0 <= lo, "nice raised the minimum for ({lo}, {hi})");
        assert!(s.domain.1 >= hi, "nice lowered the maximum for ({lo}, {hi})");
    }
}

#[test]
fn scale_maps_affinely_and_inverts() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    assert_eq!(s.scale(0.0), 0.0);
    assert_eq!(s.scale(5.0), 50.0);
    assert_eq!(s.scale(10.0), 100.0);
    assert!((s.invert(50.0) - 5.0).abs() < 1e-12);
    // unclamped extrapolates past the range
    assert_eq!(s.scale(15.0), 150.0);
}

#[test]
fn clamp_pins_to_range_endpoints() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 1.0)).clamped(true);
    assert_eq!(s.scale(-5.0), 0.0);
    assert_eq!(s.scale(15.0), 1.0);
    assert_eq!(s.scale(5.0), 0.5);
}

#[test]
fn degenerate_domain_maps_to_midpoint() {
    let s = LinearScale::new((50.0, 50.0), (0.0, 100.0));
    assert_eq!(s.scale(50.0), 50.0);
    assert_eq!(s.scale(0.0), 50.0);
    assert_eq!(s.scale(9999.0), 50.0);
}

#[test]
fn ticks_land_on_round_steps() {
    let s = LinearScale::new((0.0, 1.0), (0.0, 1.0));
    let ticks = s.ticks(10);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(*ticks.last().unwrap(), 1.0);

    let s = LinearScale::new((0.0, 100.0), (0.0, 1.0));
    let ticks = s.ticks(10);
    assert_eq!(ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
}

#[test]
fn time_scale_positions_by_day_offset() {
    let s = TimeScale::new((d(2020, 1, 1), d(2020, 1, 11)), (0.0, 100.0));
    assert_eq!(s.scale(d(2020, 1, 1)), 0.0);
    assert_eq!(s.scale(d(2020, 1, 6)), 50.0);
    assert_eq!(s.scale(d(2020, 1, 11)), 100.0);
}

#[test]
fn time_scale_clamps_out_of_domain_dates() {
    let s = TimeScale::new((d(2020, 1, 1), d(2020, 1, 11)), (0.0, 1.0)).clamped(true);
    assert_eq!(s.scale(d(2019, 12, 1)), 0.0);
    assert_eq!(s.scale(d(2020, 2, 1)), 1.0);
}
