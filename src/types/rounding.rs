//! Conversion of riding time into whole minutes

use serde::{Deserialize, Serialize};

/// How fractional minutes are resolved when riding time is converted.
///
/// The riding time is split into whole hours and a fractional-hour remainder.
/// Only the remainder, expressed in minutes, is rounded; the whole hours are
/// carried over exactly. The two parts are then summed as `hours * 60 + minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Round the minute remainder to the nearest minute, halves away from zero.
    /// `5h52.94m` becomes `5h53m`; `3h07.5m` becomes `3h08m`.
    #[default]
    Nearest,

    /// Drop the fractional part of the minute remainder.
    Floor,
}

impl RoundingPolicy {
    /// Whole minutes needed to ride `distance_km` at `speed_kmh`.
    pub fn minutes(self, distance_km: f64, speed_kmh: f64) -> i64 {
        if distance_km <= 0.0 {
            return 0;
        }
        let hours = distance_km / speed_kmh;
        let whole_hours = hours.floor();
        let remainder = (hours - whole_hours) * 60.0;
        let minutes = match self {
            RoundingPolicy::Nearest => remainder.round(),
            RoundingPolicy::Floor => remainder.floor(),
        };
        whole_hours as i64 * 60 + minutes as i64
    }

    /// Round an already fractional minute count.
    pub(crate) fn round_minutes(self, minutes: f64) -> i64 {
        match self {
            RoundingPolicy::Nearest => minutes.round() as i64,
            RoundingPolicy::Floor => minutes.floor() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearest_rounds_half_minutes_up() {
        // 100 km at 32 km/h is exactly 3h07.5m
        assert_eq!(RoundingPolicy::Nearest.minutes(100.0, 32.0), 188);
        assert_eq!(RoundingPolicy::Floor.minutes(100.0, 32.0), 187);
    }

    #[test]
    fn first_band_at_maximum_speed() {
        // 200 / 34 = 5.882h = 5h52.94m
        assert_eq!(RoundingPolicy::Nearest.minutes(200.0, 34.0), 5 * 60 + 53);
        assert_eq!(RoundingPolicy::Floor.minutes(200.0, 34.0), 5 * 60 + 52);
    }

    #[test]
    fn whole_hours_are_exact() {
        assert_eq!(RoundingPolicy::Nearest.minutes(150.0, 15.0), 600);
        assert_eq!(RoundingPolicy::Floor.minutes(150.0, 15.0), 600);
    }

    #[test]
    fn zero_and_negative_distances_take_no_time() {
        assert_eq!(RoundingPolicy::Nearest.minutes(0.0, 34.0), 0);
        assert_eq!(RoundingPolicy::Floor.minutes(-5.0, 34.0), 0);
    }

    #[test]
    fn serde_names() {
        let policy: RoundingPolicy = serde_yaml_ng::from_str("floor").unwrap();
        assert_eq!(policy, RoundingPolicy::Floor);
        assert_eq!(RoundingPolicy::default(), RoundingPolicy::Nearest);
    }

    proptest! {
        #[test]
        fn floor_never_exceeds_nearest(distance in 0.0f64..1000.0, speed in 10.0f64..40.0) {
            let floor = RoundingPolicy::Floor.minutes(distance, speed);
            let nearest = RoundingPolicy::Nearest.minutes(distance, speed);
            prop_assert!(floor <= nearest);
            prop_assert!(nearest - floor <= 1);
        }

        #[test]
        fn minutes_are_non_decreasing_in_distance(
            a in 0.0f64..1000.0,
            b in 0.0f64..1000.0,
            speed in 10.0f64..40.0
        ) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            for policy in [RoundingPolicy::Nearest, RoundingPolicy::Floor] {
                prop_assert!(policy.minutes(near, speed) <= policy.minutes(far, speed));
            }
        }
    }
}
