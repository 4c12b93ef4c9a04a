//! HTTP handlers for regional conditions

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::models::EnvironmentalReading;

use crate::error::AppResult;
use crate::services::climate::ClimateService;
use crate::services::regions::RegionService;
use crate::AppState;

/// Query parameters for condition sampling
#[derive(Debug, Deserialize)]
pub struct ConditionsQuery {
    pub region: String,
    /// Optional seed for reproducible sampling
    pub seed: Option<u64>,
}

/// Sample current conditions for a region
pub async fn get_conditions(
    State(state): State<AppState>,
    Query(query): Query<ConditionsQuery>,
) -> AppResult<Json<EnvironmentalReading>> {
    let region = RegionService::resolve(&query.region)?;
    let service = ClimateService::new(state.config.climate.clone());
    Ok(Json(service.sample(region, query.seed)))
}
