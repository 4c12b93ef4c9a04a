//! HTTP handlers for crop and irrigation recommendations

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::models::{EnvironmentalReading, ManualReadingInput};

use crate::error::{AppError, AppResult};
use crate::services::climate::ClimateService;
use crate::services::recommendation::{Assessment, RecommendationService};
use crate::services::regions::RegionService;
use crate::AppState;

/// Query parameters for a sampled recommendation
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub region: String,
    /// Optional seed for reproducible sampling
    pub seed: Option<u64>,
}

/// Reading plus assessment, one round trip for the dashboard
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub reading: EnvironmentalReading,
    #[serde(flatten)]
    pub assessment: Assessment,
}

/// Sample conditions for a region and assess them
pub async fn get_recommendation(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let region = RegionService::resolve(&query.region)?;
    let reading = ClimateService::new(state.config.climate.clone()).sample(region, query.seed);
    let assessment = RecommendationService::new().assess(&reading);
    Ok(Json(RecommendationResponse {
        reading,
        assessment,
    }))
}

/// Assess a caller-supplied reading
pub async fn assess_reading(
    Json(input): Json<ManualReadingInput>,
) -> AppResult<Json<Assessment>> {
    input
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let assessment = RecommendationService::new().assess_values(input.ndvi, input.rainfall_mm);
    Ok(Json(assessment))
}
