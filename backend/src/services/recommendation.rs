//! Recommendation assessment service
//!
//! Thin orchestration over the shared policy: runs both decisions and
//! attaches the chart scores.

use serde::Serialize;

use shared::models::{
    crop_confidence, recommend_crop, recommend_irrigation, CropScore, EnvironmentalReading,
    Recommendation,
};

/// A recommendation together with its chart scores
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub recommendation: Recommendation,
    /// Deterministic display scores, not model output
    pub confidence: Vec<CropScore>,
}

/// Recommendation service
#[derive(Clone, Default)]
pub struct RecommendationService;

impl RecommendationService {
    pub fn new() -> Self {
        Self
    }

    /// Assess a sampled reading
    pub fn assess(&self, reading: &EnvironmentalReading) -> Assessment {
        let assessment = self.assess_values(reading.ndvi, reading.rainfall_mm);

        tracing::debug!(
            region = %reading.region,
            crop = %assessment.recommendation.crop,
            irrigation = %assessment.recommendation.irrigation,
            "recommendation computed"
        );

        assessment
    }

    /// Assess raw values, for caller-supplied readings
    pub fn assess_values(&self, ndvi: f64, rainfall_mm: f64) -> Assessment {
        Assessment {
            recommendation: Recommendation {
                crop: recommend_crop(ndvi),
                irrigation: recommend_irrigation(rainfall_mm),
            },
            confidence: crop_confidence(ndvi).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CropRecommendation, IrrigationLevel};

    #[test]
    fn test_assessment_carries_both_decisions() {
        let assessment = RecommendationService::new().assess_values(0.7, 10.0);
        assert_eq!(
            assessment.recommendation.crop,
            CropRecommendation::VegetablesCitrus
        );
        assert_eq!(assessment.recommendation.irrigation, IrrigationLevel::High);
        assert_eq!(assessment.confidence.len(), 3);
    }

    #[test]
    fn test_confidence_matches_recommendation() {
        let assessment = RecommendationService::new().assess_values(0.5, 30.0);
        let best = assessment
            .confidence
            .iter()
            .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap())
            .unwrap();
        assert_eq!(best.crop, assessment.recommendation.crop);
    }
}
