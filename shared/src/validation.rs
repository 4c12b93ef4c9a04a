//! Validation utilities for AgriSense Morocco
//!
//! Includes Morocco-specific checks for the regions the dashboard covers.

use rust_decimal::Decimal;

use crate::models::Region;

// ============================================================================
// Environmental Reading Validations
// ============================================================================

/// Validate NDVI is in the unit interval
pub fn validate_ndvi(ndvi: f64) -> Result<(), &'static str> {
    if ndvi.is_nan() {
        return Err("NDVI must be a number");
    }
    if !(0.0..=1.0).contains(&ndvi) {
        return Err("NDVI must be between 0 and 1");
    }
    Ok(())
}

/// Validate temperature is plausible for Moroccan conditions
pub fn validate_temperature(celsius: f64) -> Result<(), &'static str> {
    if !(-10.0..=55.0).contains(&celsius) {
        return Err("Temperature must be between -10 and 55 degrees Celsius");
    }
    Ok(())
}

/// Validate rainfall amount is plausible
pub fn validate_rainfall(millimeters: f64) -> Result<(), &'static str> {
    if !(0.0..=500.0).contains(&millimeters) {
        return Err("Rainfall must be between 0 and 500 mm");
    }
    Ok(())
}

// ============================================================================
// Morocco-Specific Validations
// ============================================================================

/// The agricultural regions covered by the dashboard, display names
pub const MOROCCAN_AGRICULTURAL_REGIONS: &[&str] = &[
    "Souss-Massa",
    "Gharb",
    "Saïss",
    "Haouz",
    "Oriental",
    "Draa-Tafilalet",
];

/// Check coordinates fall inside Morocco's bounding box
/// (approximately 27°N to 36°N, 13.5°W to 1°W)
pub fn is_in_morocco(latitude: Decimal, longitude: Decimal) -> bool {
    latitude >= Decimal::new(27, 0)
        && latitude <= Decimal::new(36, 0)
        && longitude >= Decimal::new(-135, 1)
        && longitude <= Decimal::new(-1, 0)
}

/// Validate a region name resolves to a covered region
pub fn validate_region_name(name: &str) -> Result<(), &'static str> {
    name.parse::<Region>()
        .map(|_| ())
        .map_err(|_| "Region is not a covered Moroccan agricultural region")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Reading Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_ndvi_valid() {
        assert!(validate_ndvi(0.0).is_ok());
        assert!(validate_ndvi(0.5).is_ok());
        assert!(validate_ndvi(1.0).is_ok());
    }

    #[test]
    fn test_validate_ndvi_invalid() {
        assert!(validate_ndvi(-0.1).is_err());
        assert!(validate_ndvi(1.1).is_err());
        assert!(validate_ndvi(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_temperature() {
        assert!(validate_temperature(25.0).is_ok());
        assert!(validate_temperature(-10.0).is_ok());
        assert!(validate_temperature(55.0).is_ok());
        assert!(validate_temperature(-20.0).is_err());
        assert!(validate_temperature(60.0).is_err());
    }

    #[test]
    fn test_validate_rainfall() {
        assert!(validate_rainfall(0.0).is_ok());
        assert!(validate_rainfall(80.0).is_ok());
        assert!(validate_rainfall(500.0).is_ok());
        assert!(validate_rainfall(-1.0).is_err());
        assert!(validate_rainfall(501.0).is_err());
    }

    // ========================================================================
    // Morocco-Specific Validation Tests
    // ========================================================================

    #[test]
    fn test_region_coordinates_inside_morocco() {
        for region in Region::ALL {
            let coords = region.coordinates();
            assert!(
                is_in_morocco(coords.latitude, coords.longitude),
                "{} outside Morocco",
                region
            );
        }
    }

    #[test]
    fn test_coordinates_outside_morocco() {
        // Madrid
        assert!(!is_in_morocco(Decimal::new(404, 1), Decimal::new(-37, 1)));
        // Algiers (east of the bounding box)
        assert!(!is_in_morocco(Decimal::new(367, 1), Decimal::new(31, 1)));
    }

    #[test]
    fn test_validate_region_name_valid() {
        for name in MOROCCAN_AGRICULTURAL_REGIONS {
            assert!(validate_region_name(name).is_ok());
        }
        // ASCII spelling accepted
        assert!(validate_region_name("Saiss").is_ok());
    }

    #[test]
    fn test_validate_region_name_invalid() {
        assert!(validate_region_name("Casablanca").is_err());
        assert!(validate_region_name("").is_err());
    }
}
