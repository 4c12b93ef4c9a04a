//! Crop and irrigation recommendation policy
//!
//! NDVI selects the crop family, recent rainfall selects the irrigation
//! level. Comparisons are strict: a reading exactly on a threshold falls to
//! the lower band.

use serde::{Deserialize, Serialize};

use crate::models::reading::EnvironmentalReading;

/// NDVI above this favors vegetables and citrus
pub const NDVI_VEGETABLES_CITRUS: f64 = 0.6;
/// NDVI above this (up to the vegetables threshold) favors cereals
pub const NDVI_CEREALS: f64 = 0.4;
/// Rainfall below this requires high irrigation (mm)
pub const RAINFALL_HIGH_MM: f64 = 20.0;
/// Rainfall below this (and at least the high threshold) allows moderate irrigation (mm)
pub const RAINFALL_MODERATE_MM: f64 = 50.0;

/// Recommended crop family
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropRecommendation {
    VegetablesCitrus,
    Cereals,
    OliveDatePalm,
}

impl std::fmt::Display for CropRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropRecommendation::VegetablesCitrus => write!(f, "Vegetables / Citrus"),
            CropRecommendation::Cereals => write!(f, "Cereals"),
            CropRecommendation::OliveDatePalm => write!(f, "Olive / Date Palm"),
        }
    }
}

/// Recommended irrigation level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationLevel {
    High,
    Moderate,
    Low,
}

impl std::fmt::Display for IrrigationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrrigationLevel::High => write!(f, "High irrigation required"),
            IrrigationLevel::Moderate => write!(f, "Moderate irrigation"),
            IrrigationLevel::Low => write!(f, "Low irrigation required"),
        }
    }
}

/// The pair of decisions produced by the policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub crop: CropRecommendation,
    pub irrigation: IrrigationLevel,
}

/// Display score for one crop class, for the dashboard bar chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CropScore {
    pub crop: CropRecommendation,
    pub score: f64,
}

/// Select the crop family for a vegetation index
pub fn recommend_crop(ndvi: f64) -> CropRecommendation {
    if ndvi > NDVI_VEGETABLES_CITRUS {
        CropRecommendation::VegetablesCitrus
    } else if ndvi > NDVI_CEREALS {
        CropRecommendation::Cereals
    } else {
        CropRecommendation::OliveDatePalm
    }
}

/// Select the irrigation level for a rainfall amount
pub fn recommend_irrigation(rainfall_mm: f64) -> IrrigationLevel {
    if rainfall_mm < RAINFALL_HIGH_MM {
        IrrigationLevel::High
    } else if rainfall_mm < RAINFALL_MODERATE_MM {
        IrrigationLevel::Moderate
    } else {
        IrrigationLevel::Low
    }
}

/// Produce both decisions for a reading
pub fn recommend(reading: &EnvironmentalReading) -> Recommendation {
    Recommendation {
        crop: recommend_crop(reading.ndvi),
        irrigation: recommend_irrigation(reading.rainfall_mm),
    }
}

/// Deterministic display scores over the three crop classes.
///
/// Not model output. The recommended class takes 0.5 plus a share that
/// grows with the NDVI margin from the nearest class boundary; the
/// remainder is split 4:1 between the nearer and farther other class.
/// Scores sum to 1 and the recommended class always holds the maximum.
pub fn crop_confidence(ndvi: f64) -> [CropScore; 3] {
    let winner = recommend_crop(ndvi);

    // Margin into the winning band, normalized to [0, 1]
    let depth = match winner {
        CropRecommendation::VegetablesCitrus => (ndvi - NDVI_VEGETABLES_CITRUS) / 0.2,
        CropRecommendation::Cereals => {
            let from_lower = ndvi - NDVI_CEREALS;
            let from_upper = NDVI_VEGETABLES_CITRUS - ndvi;
            from_lower.min(from_upper) / 0.1
        }
        CropRecommendation::OliveDatePalm => (NDVI_CEREALS - ndvi) / 0.2,
    }
    .clamp(0.0, 1.0);

    let winner_score = 0.5 + 0.4 * depth;
    let remainder = 1.0 - winner_score;

    // The adjacent band closest to the reading gets most of the remainder
    let near = match winner {
        CropRecommendation::VegetablesCitrus | CropRecommendation::OliveDatePalm => {
            CropRecommendation::Cereals
        }
        CropRecommendation::Cereals => {
            let midpoint = (NDVI_CEREALS + NDVI_VEGETABLES_CITRUS) / 2.0;
            if ndvi > midpoint {
                CropRecommendation::VegetablesCitrus
            } else {
                CropRecommendation::OliveDatePalm
            }
        }
    };

    let score_for = |crop: CropRecommendation| -> f64 {
        if crop == winner {
            winner_score
        } else if crop == near {
            remainder * 0.8
        } else {
            remainder * 0.2
        }
    };

    [
        CropRecommendation::VegetablesCitrus,
        CropRecommendation::Cereals,
        CropRecommendation::OliveDatePalm,
    ]
    .map(|crop| CropScore {
        crop,
        score: score_for(crop),
    })
}
