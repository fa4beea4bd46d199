//! Sanctioned brevet distances

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::{BrevetError, Result};

/// Nominal distance of an ACP brevet.
///
/// Only five distances are sanctioned. Anything else is rejected at
/// construction, so a `BrevetDistance` value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BrevetDistance {
    Km200,
    Km300,
    Km400,
    Km600,
    Km1000,
}

impl BrevetDistance {
    /// All sanctioned distances in increasing order.
    pub const ALL: [BrevetDistance; 5] = [
        BrevetDistance::Km200,
        BrevetDistance::Km300,
        BrevetDistance::Km400,
        BrevetDistance::Km600,
        BrevetDistance::Km1000,
    ];

    /// Validate a raw kilometre value.
    ///
    /// The value must equal a sanctioned distance exactly; `201.0` or `NaN`
    /// are both [`BrevetError::InvalidBrevetDistance`].
    pub fn from_km(distance_km: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|brevet| brevet.km() == distance_km)
            .ok_or_else(|| BrevetError::invalid_distance(distance_km))
    }

    /// Nominal length in kilometres.
    pub fn km(self) -> f64 {
        f64::from(self.whole_km())
    }

    fn whole_km(self) -> u32 {
        match self {
            BrevetDistance::Km200 => 200,
            BrevetDistance::Km300 => 300,
            BrevetDistance::Km400 => 400,
            BrevetDistance::Km600 => 600,
            BrevetDistance::Km1000 => 1000,
        }
    }

    /// Total time allowed to reach the finish control.
    pub fn final_close(self) -> TimeDelta {
        let minutes = match self {
            BrevetDistance::Km200 => 13 * 60 + 30,
            BrevetDistance::Km300 => 20 * 60,
            BrevetDistance::Km400 => 27 * 60,
            BrevetDistance::Km600 => 40 * 60,
            BrevetDistance::Km1000 => 75 * 60,
        };
        TimeDelta::minutes(minutes)
    }
}

impl TryFrom<f64> for BrevetDistance {
    type Error = BrevetError;

    fn try_from(distance_km: f64) -> Result<Self> {
        Self::from_km(distance_km)
    }
}

impl TryFrom<u32> for BrevetDistance {
    type Error = BrevetError;

    fn try_from(distance_km: u32) -> Result<Self> {
        Self::from_km(f64::from(distance_km))
    }
}

impl From<BrevetDistance> for u32 {
    fn from(distance: BrevetDistance) -> Self {
        distance.whole_km()
    }
}

impl std::fmt::Display for BrevetDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km", self.whole_km())
    }
}
