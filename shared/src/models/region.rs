//! Moroccan agricultural region reference data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::types::GpsCoordinates;

/// The six agricultural regions covered by the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    SoussMassa,
    Gharb,
    Saiss,
    Haouz,
    Oriental,
    DraaTafilalet,
}

/// Error returned when a region name cannot be resolved
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl Region {
    /// All regions, in the order the dashboard lists them
    pub const ALL: [Region; 6] = [
        Region::SoussMassa,
        Region::Gharb,
        Region::Saiss,
        Region::Haouz,
        Region::Oriental,
        Region::DraaTafilalet,
    ];

    /// Human-readable region name
    pub fn name(&self) -> &'static str {
        match self {
            Region::SoussMassa => "Souss-Massa",
            Region::Gharb => "Gharb",
            Region::Saiss => "Saïss",
            Region::Haouz => "Haouz",
            Region::Oriental => "Oriental",
            Region::DraaTafilalet => "Draa-Tafilalet",
        }
    }

    /// Representative coordinates used for the map marker
    pub fn coordinates(&self) -> GpsCoordinates {
        let (lat, lon) = match self {
            Region::SoussMassa => (Decimal::new(304, 1), Decimal::new(-96, 1)),
            Region::Gharb => (Decimal::new(343, 1), Decimal::new(-63, 1)),
            Region::Saiss => (Decimal::new(340, 1), Decimal::new(-49, 1)),
            Region::Haouz => (Decimal::new(316, 1), Decimal::new(-80, 1)),
            Region::Oriental => (Decimal::new(346, 1), Decimal::new(-29, 1)),
            Region::DraaTafilalet => (Decimal::new(319, 1), Decimal::new(-55, 1)),
        };
        GpsCoordinates::new(lat, lon)
    }

    /// Stable identifier used in URLs and query parameters
    pub fn slug(&self) -> &'static str {
        match self {
            Region::SoussMassa => "souss-massa",
            Region::Gharb => "gharb",
            Region::Saiss => "saiss",
            Region::Haouz => "haouz",
            Region::Oriental => "oriental",
            Region::DraaTafilalet => "draa-tafilalet",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    /// Accepts display names, slugs, and the ASCII spelling of Saïss
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "souss-massa" | "souss massa" => Ok(Region::SoussMassa),
            "gharb" => Ok(Region::Gharb),
            "saïss" | "saiss" => Ok(Region::Saiss),
            "haouz" => Ok(Region::Haouz),
            "oriental" => Ok(Region::Oriental),
            "draa-tafilalet" | "draa tafilalet" => Ok(Region::DraaTafilalet),
            _ => Err(UnknownRegion(s.to_string())),
        }
    }
}
