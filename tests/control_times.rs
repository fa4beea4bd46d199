//! Control time tests against the public API
//!
//! Reference values use a start of 2000-01-01T00:00:00.

use brevet_times::{BrevetDistance, BrevetError, close_time, open_time};
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

const VALID_DISTANCES: [f64; 5] = [200.0, 300.0, 400.0, 600.0, 1000.0];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
}

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, day, hour, minute, 0).unwrap()
}

#[test]
fn zero_kilometre_control() {
    init_tracing();
    for brevet in VALID_DISTANCES {
        assert_eq!(open_time(0.0, brevet, &start()).unwrap(), start());
        assert_eq!(close_time(0.0, brevet, &start()).unwrap(), start() + TimeDelta::hours(1));
    }
}

#[test]
fn short_controls_use_flat_close_allowance() {
    init_tracing();
    // open times are unaffected
    assert_eq!(open_time(50.0, 400.0, &start()).unwrap(), at(1, 1, 28));
    assert_eq!(close_time(20.0, 300.0, &start()).unwrap(), at(1, 2, 0));
    assert_eq!(close_time(40.0, 400.0, &start()).unwrap(), at(1, 3, 0));
    assert_eq!(close_time(60.0, 600.0, &start()).unwrap(), at(1, 4, 0));
    // standard formula from 61 km
    assert_eq!(close_time(61.0, 1000.0, &start()).unwrap(), at(1, 4, 4));
}

#[test]
fn finish_controls() {
    init_tracing();
    assert_eq!(open_time(200.0, 200.0, &start()).unwrap(), at(1, 5, 53));
    assert_eq!(open_time(400.0, 400.0, &start()).unwrap(), at(1, 12, 8));
    assert_eq!(close_time(200.0, 200.0, &start()).unwrap(), at(1, 13, 30));
    assert_eq!(close_time(600.0, 600.0, &start()).unwrap(), at(2, 16, 0));
    assert_eq!(close_time(1000.0, 1000.0, &start()).unwrap(), at(4, 3, 0));
}

#[test]
fn controls_past_the_finish() {
    init_tracing();
    assert_eq!(open_time(240.0, 200.0, &start()).unwrap(), at(1, 5, 53));
    assert_eq!(open_time(480.0, 400.0, &start()).unwrap(), at(1, 12, 8));
    assert_eq!(close_time(1200.0, 1000.0, &start()).unwrap(), at(4, 3, 0));
    assert_eq!(close_time(720.0, 600.0, &start()).unwrap(), at(2, 16, 0));
}

#[test]
fn invalid_brevet_distance() {
    init_tracing();
    for brevet in [999.0, 10000.0, 700.0, 0.0, 250.0] {
        assert_eq!(
            open_time(200.0, brevet, &start()),
            Err(BrevetError::InvalidBrevetDistance { distance_km: brevet })
        );
        assert!(matches!(
            close_time(200.0, brevet, &start()),
            Err(BrevetError::InvalidBrevetDistance { .. })
        ));
    }
}

#[test]
fn result_keeps_start_offset() {
    init_tracing();
    let pacific = FixedOffset::west_opt(7 * 3600).unwrap();
    let t = pacific.with_ymd_and_hms(2024, 7, 13, 5, 0, 0).unwrap();
    let open = open_time(300.0, 300.0, &t).unwrap();
    assert_eq!(open.offset(), &pacific);
    // 5h53m for the first band, 100 km at 32 km/h rounds to 3h08m
    assert_eq!(open, pacific.with_ymd_and_hms(2024, 7, 13, 14, 1, 0).unwrap());
}

#[test]
fn typed_distance_matches_raw_entry_point() {
    let calculator = brevet_times::ControlTimeCalculator::default();
    for brevet in BrevetDistance::ALL {
        for control in [0.0, 45.0, 175.0, 333.0, 599.9, 860.0] {
            assert_eq!(
                calculator.open_time(control, brevet, &start()).unwrap(),
                open_time(control, brevet.km(), &start()).unwrap()
            );
            assert_eq!(
                calculator.close_time(control, brevet, &start()).unwrap(),
                close_time(control, brevet.km(), &start()).unwrap()
            );
        }
    }
}

proptest! {
    #[test]
    fn open_time_never_precedes_start(
        control in -100.0f64..1500.0,
        brevet in prop::sample::select(VALID_DISTANCES.to_vec())
    ) {
        prop_assert!(open_time(control, brevet, &start()).unwrap() >= start());
    }

    #[test]
    fn close_time_follows_open_time(
        control in 0.0f64..1500.0,
        brevet in prop::sample::select(VALID_DISTANCES.to_vec())
    ) {
        let open = open_time(control, brevet, &start()).unwrap();
        let close = close_time(control, brevet, &start()).unwrap();
        prop_assert!(close > open);
    }
}
