//! Environmental reading models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::region::Region;

/// A synthetic environmental reading for one region at one instant
///
/// Generated per request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    pub region: Region,
    pub temperature_celsius: f64,
    pub rainfall_mm: f64,
    /// Normalized Difference Vegetation Index, in [0, 1]
    pub ndvi: f64,
    pub sampled_at: DateTime<Utc>,
}

/// Caller-supplied reading for an ad-hoc recommendation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ManualReadingInput {
    #[validate(range(min = -10.0, max = 55.0))]
    pub temperature_celsius: f64,

    #[validate(range(min = 0.0, max = 500.0))]
    pub rainfall_mm: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub ndvi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_input_accepts_plausible_values() {
        let input = ManualReadingInput {
            temperature_celsius: 25.0,
            rainfall_mm: 10.0,
            ndvi: 0.7,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_manual_input_rejects_ndvi_out_of_range() {
        let input = ManualReadingInput {
            temperature_celsius: 25.0,
            rainfall_mm: 10.0,
            ndvi: 1.2,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_manual_input_rejects_negative_rainfall() {
        let input = ManualReadingInput {
            temperature_celsius: 25.0,
            rainfall_mm: -3.0,
            ndvi: 0.5,
        };
        assert!(input.validate().is_err());
    }
}
