//! Brevet schedules.
//!
//! A schedule describes one brevet: its nominal distance, start time and the
//! list of controls along the route. Control distances may be given in
//! kilometres or miles. [`BrevetSchedule::windows`] computes the open/close
//! window of every control in one pass.
//!
//! ```rust
//! use brevet_times::{BrevetSchedule, ControlTimeCalculator};
//!
//! let schedule = BrevetSchedule::from_yaml(
//!     r#"
//! distance: 200
//! start: 2000-01-01T07:00:00-08:00
//! controls:
//!   - distance: 0
//!     name: Start
//!   - distance: 60
//!   - distance: 205
//!     name: Finish
//! "#,
//! )?;
//!
//! let windows = schedule.windows(&ControlTimeCalculator::default())?;
//! assert_eq!(windows.len(), 3);
//! assert_eq!(windows[2].close.to_rfc3339(), "2000-01-01T20:30:00-08:00");
//! # Ok::<(), brevet_times::BrevetError>(())
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::BrevetDistance;
use crate::{BrevetError, ControlTimeCalculator, Result};

/// Kilometres in one statute mile.
pub const KM_PER_MILE: f64 = 1.609344;

/// Unit in which control distances are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    #[serde(alias = "km")]
    Kilometers,
    #[serde(alias = "mi")]
    Miles,
}

impl DistanceUnit {
    pub fn to_km(self, distance: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => distance,
            DistanceUnit::Miles => distance * KM_PER_MILE,
        }
    }
}

/// A control as written in a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Distance from the start, in the schedule's unit
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// One brevet and its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrevetSchedule {
    pub distance: BrevetDistance,
    pub start: DateTime<FixedOffset>,
    #[serde(default)]
    pub unit: DistanceUnit,
    #[serde(default)]
    pub controls: Vec<ControlPoint>,
}

/// A control paired with its computed window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledControl {
    pub control: ControlPoint,
    pub distance_km: f64,
    pub open: DateTime<FixedOffset>,
    pub close: DateTime<FixedOffset>,
}

impl BrevetSchedule {
    /// Parse and validate a schedule document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let schedule: BrevetSchedule = serde_yaml_ng::from_str(yaml)
            .map_err(|e| BrevetError::parse("brevet schedule", e.to_string()))?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Controls must be listed in non-decreasing distance order.
    pub fn validate(&self) -> Result<()> {
        for (index, pair) in self.controls.windows(2).enumerate() {
            if pair[1].distance < pair[0].distance {
                return Err(BrevetError::parse(
                    "brevet schedule",
                    format!(
                        "control {} at {} comes before control {} at {}",
                        index + 1,
                        pair[1].distance,
                        index,
                        pair[0].distance
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Compute the window of every control, in listed order.
    pub fn windows(&self, calculator: &ControlTimeCalculator) -> Result<Vec<ScheduledControl>> {
        debug!(
            brevet = %self.distance,
            start = %self.start,
            controls = self.controls.len(),
            "Computing brevet schedule"
        );

        self.controls
            .iter()
            .map(|control| {
                let distance_km = self.unit.to_km(control.distance);
                let window = calculator.window(distance_km, self.distance, &self.start)?;
                Ok(ScheduledControl {
                    control: control.clone(),
                    distance_km,
                    open: window.open,
                    close: window.close,
                })
            })
            .collect()
    }
}
