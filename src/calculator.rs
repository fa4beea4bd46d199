//! Control open and close time policies.
//!
//! [`ControlTimeCalculator`] turns a control distance, a nominal brevet
//! distance and a start time into the window during which a rider may check
//! in at that control.
//!
//! ## Open time
//!
//! The control distance is clamped to the brevet length, run through the
//! segmented speed model with the maximum-speed table, and added to the start.
//!
//! ## Close time
//!
//! Evaluated in order:
//! 1. **Finish**: controls at or past the brevet length close at the fixed
//!    final duration for that distance (13h30 for a 200, 75h for a 1000).
//! 2. **Short control**: controls within the first 60 km close one hour plus
//!    20 km/h riding time after the start.
//! 3. **Standard**: segmented speed model with the minimum-speed table.
//!
//! ```rust
//! use brevet_times::{BrevetDistance, ControlTimeCalculator};
//! use chrono::{TimeZone, Utc};
//!
//! let calculator = ControlTimeCalculator::default();
//! let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
//! let window = calculator.window(200.0, BrevetDistance::Km200, &start)?;
//!
//! assert_eq!(window.open, Utc.with_ymd_and_hms(2000, 1, 1, 5, 53, 0).unwrap());
//! assert_eq!(window.close, Utc.with_ymd_and_hms(2000, 1, 1, 13, 30, 0).unwrap());
//! # Ok::<(), brevet_times::BrevetError>(())
//! ```

use chrono::{DateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::speed_model::elapsed_minutes;
use crate::types::{BrevetDistance, RoundingPolicy, SpeedTable};
use crate::{BrevetError, Result};

/// Controls up to this distance use the short-control close rule.
pub const SHORT_CONTROL_KM: f64 = 60.0;

/// Riding speed (km/h) assumed by the short-control close rule.
pub const SHORT_CONTROL_SPEED_KMH: f64 = 20.0;

/// Flat allowance added to every short-control close time.
pub const SHORT_CONTROL_GRACE_MINUTES: f64 = 60.0;

/// ACP accepts a finish control up to this fraction past the nominal distance.
pub const FINISH_TOLERANCE: f64 = 0.2;

/// Rounding configuration for a [`ControlTimeCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Rounding applied when converting open-time riding minutes
    pub open_rounding: RoundingPolicy,
    /// Rounding applied when converting close-time riding minutes
    pub close_rounding: RoundingPolicy,
}

impl CalculatorConfig {
    /// Parse a configuration document.
    ///
    /// Missing fields keep their defaults, so an empty mapping is valid.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }
}

/// Open and close times of a single control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct ControlWindow<Tz: TimeZone> {
    pub open: DateTime<Tz>,
    pub close: DateTime<Tz>,
}

/// Computes ACP control windows.
///
/// Stateless apart from its rounding configuration; share it freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlTimeCalculator {
    config: CalculatorConfig,
}

impl ControlTimeCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Riding minutes from the start until the control opens.
    pub fn open_minutes(&self, control_dist_km: f64, brevet: BrevetDistance) -> i64 {
        let distance = clamp_control(control_dist_km, brevet);
        elapsed_minutes(distance, &SpeedTable::MAXIMUM, self.config.open_rounding)
    }

    /// Riding minutes from the start until the control closes.
    pub fn close_minutes(&self, control_dist_km: f64, brevet: BrevetDistance) -> i64 {
        let distance = control_dist_km.max(0.0);
        if distance >= brevet.km() {
            warn_if_far_past_finish(distance, brevet);
            brevet.final_close().num_minutes()
        } else if distance <= SHORT_CONTROL_KM {
            let riding = distance / SHORT_CONTROL_SPEED_KMH * 60.0;
            self.config.close_rounding.round_minutes(SHORT_CONTROL_GRACE_MINUTES + riding)
        } else {
            elapsed_minutes(distance, &SpeedTable::MINIMUM, self.config.close_rounding)
        }
    }

    /// Time at which the control opens, in the start time's timezone.
    pub fn open_time<Tz: TimeZone>(
        &self,
        control_dist_km: f64,
        brevet: BrevetDistance,
        start: &DateTime<Tz>,
    ) -> Result<DateTime<Tz>> {
        let minutes = self.open_minutes(control_dist_km, brevet);
        debug!(control_dist_km, %brevet, minutes, "Computed control open time");
        shift(start, minutes)
    }

    /// Time at which the control closes, in the start time's timezone.
    pub fn close_time<Tz: TimeZone>(
        &self,
        control_dist_km: f64,
        brevet: BrevetDistance,
        start: &DateTime<Tz>,
    ) -> Result<DateTime<Tz>> {
        let minutes = self.close_minutes(control_dist_km, brevet);
        debug!(control_dist_km, %brevet, minutes, "Computed control close time");
        shift(start, minutes)
    }

    /// Both times for a control.
    pub fn window<Tz: TimeZone>(
        &self,
        control_dist_km: f64,
        brevet: BrevetDistance,
        start: &DateTime<Tz>,
    ) -> Result<ControlWindow<Tz>> {
        Ok(ControlWindow {
            open: self.open_time(control_dist_km, brevet, start)?,
            close: self.close_time(control_dist_km, brevet, start)?,
        })
    }
}

/// Negative distances count as the start; anything past the finish counts as the finish.
fn clamp_control(control_dist_km: f64, brevet: BrevetDistance) -> f64 {
    control_dist_km.max(0.0).min(brevet.km())
}

fn warn_if_far_past_finish(distance: f64, brevet: BrevetDistance) {
    let limit = brevet.km() * (1.0 + FINISH_TOLERANCE);
    if distance > limit {
        warn!(
            control_dist_km = distance,
            %brevet,
            limit_km = limit,
            "Control lies more than 20% past the nominal brevet distance"
        );
    }
}

fn shift<Tz: TimeZone>(start: &DateTime<Tz>, minutes: i64) -> Result<DateTime<Tz>> {
    TimeDelta::try_minutes(minutes)
        .and_then(|delta| start.clone().checked_add_signed(delta))
        .ok_or(BrevetError::TimestampOutOfRange { minutes })
}
