//! Region catalogue service

use serde::Serialize;

use shared::models::Region;
use shared::types::{GpsCoordinates, MapViewport};

use crate::error::{AppError, AppResult};

/// Region catalogue entry
#[derive(Debug, Clone, Serialize)]
pub struct RegionInfo {
    pub id: Region,
    pub name: String,
    pub slug: String,
    pub coordinates: GpsCoordinates,
}

/// Map payload for the dashboard map widget
#[derive(Debug, Clone, Serialize)]
pub struct RegionMap {
    pub viewport: MapViewport,
    pub markers: Vec<RegionMarker>,
}

/// A single map marker
#[derive(Debug, Clone, Serialize)]
pub struct RegionMarker {
    pub name: String,
    pub coordinates: GpsCoordinates,
}

/// Region catalogue service
#[derive(Clone, Default)]
pub struct RegionService;

impl RegionService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a region name or slug
    pub fn resolve(name: &str) -> AppResult<Region> {
        name.parse()
            .map_err(|_| AppError::NotFound(format!("Region '{}'", name)))
    }

    /// List all covered regions, in dashboard order
    pub fn list(&self) -> Vec<RegionInfo> {
        Region::ALL.iter().map(|r| Self::info(*r)).collect()
    }

    /// Get one region by name or slug
    pub fn get(&self, name: &str) -> AppResult<RegionInfo> {
        Ok(Self::info(Self::resolve(name)?))
    }

    /// Map viewport and markers for all regions
    pub fn map(&self) -> RegionMap {
        RegionMap {
            viewport: MapViewport::morocco(),
            markers: Region::ALL
                .iter()
                .map(|r| RegionMarker {
                    name: r.name().to_string(),
                    coordinates: r.coordinates(),
                })
                .collect(),
        }
    }

    fn info(region: Region) -> RegionInfo {
        RegionInfo {
            id: region,
            name: region.name().to_string(),
            slug: region.slug().to_string(),
            coordinates: region.coordinates(),
        }
    }
}
