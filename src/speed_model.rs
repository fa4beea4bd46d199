//! Segmented speed model.
//!
//! A control distance is decomposed into completed 200 km bands and a
//! remainder. Each completed band is ridden at its own speed and the remainder
//! at the speed of the band it falls into. At most three bands are ever
//! completed; everything past 600 km is remainder ridden at the band 3 speed.

use tracing::trace;

use crate::types::{BAND_COUNT, BAND_LENGTH_KM, RoundingPolicy, SpeedTable};

/// A control distance split into whole bands and a remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSplit {
    /// Completed 200 km bands, 0 to 3.
    pub full_bands: usize,
    /// Kilometres ridden in the current band.
    pub remainder_km: f64,
}

impl BandSplit {
    /// Split `distance_km`. Negative distances are treated as 0 km.
    pub fn new(distance_km: f64) -> Self {
        let mut remainder_km = distance_km.max(0.0);
        let mut full_bands = 0;
        while remainder_km >= BAND_LENGTH_KM && full_bands < BAND_COUNT - 1 {
            remainder_km -= BAND_LENGTH_KM;
            full_bands += 1;
        }
        Self { full_bands, remainder_km }
    }
}

/// Elapsed riding minutes to cover `distance_km` with `table`.
///
/// Each band and the remainder are converted to minutes independently with
/// `rounding` and then summed. Callers clamp the distance to the brevet length
/// beforehand.
pub fn elapsed_minutes(distance_km: f64, table: &SpeedTable, rounding: RoundingPolicy) -> i64 {
    let split = BandSplit::new(distance_km);
    let banded: i64 = (0..split.full_bands)
        .map(|band| rounding.minutes(BAND_LENGTH_KM, table.speed(band)))
        .sum();
    let remainder = rounding.minutes(split.remainder_km, table.speed(split.full_bands));

    trace!(
        distance_km,
        full_bands = split.full_bands,
        remainder_km = split.remainder_km,
        banded,
        remainder,
        "Segmented speed model"
    );

    banded + remainder
}
