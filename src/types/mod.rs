//! Core value types for control time calculation.
//!
//! - [`BrevetDistance`] is a validated nominal brevet distance carrying its final close duration
//! - [`SpeedTable`] holds the per-band maximum and minimum riding speeds
//! - [`RoundingPolicy`] converts riding time into whole minutes
//!
//! ```rust
//! use brevet_times::types::{BrevetDistance, RoundingPolicy, SpeedTable};
//!
//! let brevet = BrevetDistance::from_km(300.0)?;
//! assert_eq!(brevet.final_close().num_hours(), 20);
//!
//! let minutes = RoundingPolicy::Nearest.minutes(200.0, SpeedTable::MAXIMUM.speed(0));
//! assert_eq!(minutes, 5 * 60 + 53);
//! # Ok::<(), brevet_times::BrevetError>(())
//! ```

mod distance;
mod rounding;
mod speed;

pub use distance::BrevetDistance;
pub use rounding::RoundingPolicy;
pub use speed::{BAND_COUNT, BAND_LENGTH_KM, SpeedTable};
