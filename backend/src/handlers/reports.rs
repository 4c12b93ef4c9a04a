//! HTTP handlers for report generation and export

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::climate::ClimateService;
use crate::services::recommendation::RecommendationService;
use crate::services::regions::RegionService;
use crate::services::reporting::{ConditionsReport, ReportingService};
use crate::AppState;

/// Query parameters for report generation
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub region: String,
    /// Optional seed for reproducible sampling
    pub seed: Option<u64>,
}

/// Assembled report plus its plain-text rendering
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    #[serde(flatten)]
    pub report: ConditionsReport,
    pub text: String,
}

/// Generate a conditions report for a region
pub async fn generate_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ReportResponse>> {
    let region = RegionService::resolve(&query.region)?;
    let reading = ClimateService::new(state.config.climate.clone()).sample(region, query.seed);
    let assessment = RecommendationService::new().assess(&reading);

    let report = ReportingService::new(state.config.report.base_url.clone())
        .assemble(reading, assessment.recommendation);
    let text = ReportingService::render_text(&report);

    Ok(Json(ReportResponse { report, text }))
}

/// Query parameters for CSV export
#[derive(Debug, Deserialize)]
pub struct CsvExportQuery {
    pub region: String,
    /// Optional seed for reproducible sampling
    pub seed: Option<u64>,
    /// Number of daily readings to export (default 7, max 90)
    pub days: Option<u32>,
}

/// Export a sampled reading series as CSV
pub async fn export_report_csv(
    State(state): State<AppState>,
    Query(query): Query<CsvExportQuery>,
) -> AppResult<impl IntoResponse> {
    let days = query.days.unwrap_or(7);
    if !(1..=90).contains(&days) {
        return Err(AppError::Validation {
            field: "days".to_string(),
            message: "days must be between 1 and 90".to_string(),
            message_fr: "days doit être compris entre 1 et 90".to_string(),
        });
    }

    let region = RegionService::resolve(&query.region)?;
    let readings =
        ClimateService::new(state.config.climate.clone()).sample_series(region, query.seed, days);
    let rows = ReportingService::csv_rows(&readings);
    let csv = ReportingService::export_to_csv(&rows)?;

    Ok(([(header::CONTENT_TYPE, "text/csv")], csv))
}
