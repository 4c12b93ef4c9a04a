//! Business logic services for AgriSense Morocco

pub mod climate;
pub mod recommendation;
pub mod regions;
pub mod reporting;

pub use climate::ClimateService;
pub use recommendation::RecommendationService;
pub use regions::RegionService;
pub use reporting::ReportingService;
