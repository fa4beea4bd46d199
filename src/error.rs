//! Error types for control time calculation.
//!
//! The calculation itself has a single domain failure: a nominal brevet
//! distance that is not one of the sanctioned ACP distances. Every other input,
//! including negative control distances or controls far past the finish, is
//! handled by a defined policy and never surfaces as an error.
//!
//! ## Error Categories
//!
//! - **Invalid Brevet Distance**: the nominal distance is not 200, 300, 400, 600 or 1000 km
//! - **Timestamp Range**: shifting the start time left chrono's representable range
//! - **Parse Errors**: malformed schedule or configuration documents
//!
//! ```rust
//! use brevet_times::BrevetError;
//!
//! let error = BrevetError::invalid_distance(999.0);
//! assert!(error.to_string().contains("999"));
//! for suggestion in error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use thiserror::Error;

/// Result type alias for brevet operations.
pub type Result<T, E = BrevetError> = std::result::Result<T, E>;

/// Main error type for brevet operations.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BrevetError {
    #[error(
        "Invalid brevet distance {distance_km} km: expected one of 200, 300, 400, 600 or 1000 km"
    )]
    InvalidBrevetDistance { distance_km: f64 },

    #[error("Control time out of range: start shifted by {minutes} minutes")]
    TimestampOutOfRange { minutes: i64 },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },
}

impl BrevetError {
    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            BrevetError::InvalidBrevetDistance { .. } => vec![
                "Use one of the sanctioned distances: 200, 300, 400, 600 or 1000 km",
                "Pass the nominal brevet distance, not the measured route length",
            ],
            BrevetError::TimestampOutOfRange { .. } => {
                vec!["Check the brevet start time is a realistic calendar date"]
            }
            BrevetError::Parse { .. } => vec![
                "Check the document is valid YAML",
                "Verify field names and value types",
                "List controls in order of increasing distance",
            ],
        }
    }

    /// Helper constructor for invalid brevet distances.
    pub fn invalid_distance(distance_km: f64) -> Self {
        BrevetError::InvalidBrevetDistance { distance_km }
    }

    /// Helper constructor for parse errors.
    pub fn parse(context: impl Into<String>, details: impl Into<String>) -> Self {
        BrevetError::Parse { context: context.into(), details: details.into() }
    }
}

impl From<serde_yaml_ng::Error> for BrevetError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        BrevetError::parse("YAML document", err.to_string())
    }
}
