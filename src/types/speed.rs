//! Per-band riding speeds

/// Number of 200 km bands with their own characteristic speed.
pub const BAND_COUNT: usize = 4;

/// Length of a full speed band in kilometres.
pub const BAND_LENGTH_KM: f64 = 200.0;

/// Riding speeds (km/h) for each successive 200 km band of a route.
///
/// Band 0 covers 0-200 km, band 1 200-400 km, band 2 400-600 km and band 3
/// everything beyond 600 km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTable {
    speeds: [f64; BAND_COUNT],
}

impl SpeedTable {
    /// Maximum speeds, which determine control open times.
    pub const MAXIMUM: SpeedTable = SpeedTable { speeds: [34.0, 32.0, 30.0, 28.0] };

    /// Minimum speeds, which determine control close times.
    pub const MINIMUM: SpeedTable = SpeedTable { speeds: [15.0, 15.0, 15.0, 11.428] };

    /// Speed for `band`. Bands past the last entry use the last speed.
    pub fn speed(&self, band: usize) -> f64 {
        self.speeds[band.min(BAND_COUNT - 1)]
    }

    pub fn speeds(&self) -> &[f64; BAND_COUNT] {
        &self.speeds
    }
}
