//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Supported languages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    French,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
        }
    }
}

/// Map viewport for the dashboard map widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapViewport {
    pub center: GpsCoordinates,
    pub zoom: u8,
}

impl MapViewport {
    /// Viewport framing the whole of Morocco
    pub fn morocco() -> Self {
        Self {
            center: GpsCoordinates::new(Decimal::new(315, 1), Decimal::new(-75, 1)),
            zoom: 5,
        }
    }
}
