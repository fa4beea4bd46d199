//! Shared fixtures for unit tests and benchmarks.

#![cfg(any(test, feature = "benchmark"))]

use chrono::{DateTime, FixedOffset, TimeZone};

/// Five-control 400 km brevet starting at [`reference_start`].
pub const SAMPLE_SCHEDULE_YAML: &str = r#"
distance: 400
start: 2000-01-01T00:00:00+00:00
controls:
  - distance: 0
    name: Start
    location: Town hall
  - distance: 60
    name: Bakery
  - distance: 175
  - distance: 300
    name: Ferry landing
  - distance: 410
    name: Finish
"#;

/// 2000-01-01T00:00:00Z, the start used by the published reference examples.
pub fn reference_start() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .and_then(|utc| utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).single())
        .unwrap_or_else(|| unreachable!("2000-01-01T00:00:00Z is representable"))
}

/// Control distances spread across every band of a 1000 km brevet.
pub fn control_distances() -> Vec<f64> {
    (0..=50).map(|i| f64::from(i) * 21.7).collect()
}
