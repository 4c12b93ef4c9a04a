//! HTTP handlers for the region catalogue

use axum::{extract::Path, Json};

use crate::error::AppResult;
use crate::services::regions::{RegionInfo, RegionMap, RegionService};

/// List all covered regions
pub async fn list_regions() -> Json<Vec<RegionInfo>> {
    Json(RegionService::new().list())
}

/// Get one region by name or slug
pub async fn get_region(Path(name): Path<String>) -> AppResult<Json<RegionInfo>> {
    let info = RegionService::new().get(&name)?;
    Ok(Json(info))
}

/// Get the dashboard map payload
pub async fn get_region_map() -> Json<RegionMap> {
    Json(RegionService::new().map())
}
