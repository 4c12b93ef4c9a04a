//! Reporting service for report assembly and data export
//! Provides the downloadable conditions report and CSV series export

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use shared::models::{recommend, EnvironmentalReading, Recommendation};

use crate::error::AppResult;

/// Assembled conditions report
///
/// The `text` rendering of this document is what clients lay out as a PDF;
/// `share_url` is what the dashboard encodes as a QR code.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionsReport {
    pub id: Uuid,
    pub region: String,
    pub reading: EnvironmentalReading,
    pub recommendation: Recommendation,
    pub insight: String,
    pub generated_at: DateTime<Utc>,
    pub share_url: String,
}

/// One row of the CSV series export
#[derive(Debug, Serialize)]
pub struct ReadingCsvRow {
    pub region: String,
    pub date: String,
    pub temperature_celsius: f64,
    pub rainfall_mm: f64,
    pub ndvi: f64,
    pub recommended_crop: String,
    pub irrigation_strategy: String,
}

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    base_url: String,
}

impl ReportingService {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Assemble a report for a reading and its recommendation
    pub fn assemble(
        &self,
        reading: EnvironmentalReading,
        recommendation: Recommendation,
    ) -> ConditionsReport {
        let id = Uuid::new_v4();
        ConditionsReport {
            id,
            region: reading.region.name().to_string(),
            reading,
            recommendation,
            insight: "This report is generated using an AI-based decision support system \
                      tailored for Morocco."
                .to_string(),
            generated_at: Utc::now(),
            share_url: Self::generate_share_url(id, &self.base_url),
        }
    }

    /// Render the report body as plain text
    pub fn render_text(report: &ConditionsReport) -> String {
        format!(
            "AgriSense Morocco - AI Agriculture Report\n\n\
             Region: {}\n\
             Temperature: {:.1} C\n\
             Rainfall: {:.1} mm\n\
             NDVI Index: {:.2}\n\n\
             Recommended Crop: {}\n\
             Irrigation Strategy: {}\n\n\
             Insight:\n{}",
            report.region,
            report.reading.temperature_celsius,
            report.reading.rainfall_mm,
            report.reading.ndvi,
            report.recommendation.crop,
            report.recommendation.irrigation,
            report.insight,
        )
    }

    /// Generate the share URL for a report (QR code target)
    pub fn generate_share_url(report_id: Uuid, base_url: &str) -> String {
        format!("{}/reports/{}", base_url.trim_end_matches('/'), report_id)
    }

    /// Build CSV rows for a reading series, one recommendation per row
    pub fn csv_rows(readings: &[EnvironmentalReading]) -> Vec<ReadingCsvRow> {
        readings
            .iter()
            .map(|reading| {
                let recommendation = recommend(reading);
                ReadingCsvRow {
                    region: reading.region.name().to_string(),
                    date: reading.sampled_at.format("%Y-%m-%d").to_string(),
                    temperature_celsius: reading.temperature_celsius,
                    rainfall_mm: reading.rainfall_mm,
                    ndvi: reading.ndvi,
                    recommended_crop: recommendation.crop.to_string(),
                    irrigation_strategy: recommendation.irrigation.to_string(),
                }
            })
            .collect()
    }

    /// Export report data as CSV
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record).map_err(|e| {
                crate::error::AppError::Internal(format!("CSV serialization error: {}", e))
            })?;
        }
        let csv_data = String::from_utf8(wtr.into_inner().map_err(|e| {
            crate::error::AppError::Internal(format!("CSV writer error: {}", e))
        })?)
        .map_err(|e| crate::error::AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Region;

    fn reading() -> EnvironmentalReading {
        EnvironmentalReading {
            region: Region::SoussMassa,
            temperature_celsius: 25.04,
            rainfall_mm: 10.0,
            ndvi: 0.7,
            sampled_at: Utc::now(),
        }
    }

    fn service() -> ReportingService {
        ReportingService::new("https://agrisense.ma".to_string())
    }

    #[test]
    fn test_assembled_report_carries_share_url() {
        let reading = reading();
        let recommendation = recommend(&reading);
        let report = service().assemble(reading, recommendation);
        assert_eq!(
            report.share_url,
            format!("https://agrisense.ma/reports/{}", report.id)
        );
    }

    #[test]
    fn test_share_url_strips_trailing_slash() {
        let id = Uuid::new_v4();
        let url = ReportingService::generate_share_url(id, "https://agrisense.ma/");
        assert_eq!(url, format!("https://agrisense.ma/reports/{}", id));
    }

    #[test]
    fn test_rendered_text_contains_readings_and_decisions() {
        let reading = reading();
        let recommendation = recommend(&reading);
        let report = service().assemble(reading, recommendation);
        let text = ReportingService::render_text(&report);

        assert!(text.starts_with("AgriSense Morocco - AI Agriculture Report"));
        assert!(text.contains("Region: Souss-Massa"));
        assert!(text.contains("Temperature: 25.0 C"));
        assert!(text.contains("Rainfall: 10.0 mm"));
        assert!(text.contains("NDVI Index: 0.70"));
        assert!(text.contains("Recommended Crop: Vegetables / Citrus"));
        assert!(text.contains("Irrigation Strategy: High irrigation required"));
    }

    #[test]
    fn test_csv_export_has_row_per_reading() {
        let readings = vec![reading(), reading(), reading()];
        let rows = ReportingService::csv_rows(&readings);
        let csv = ReportingService::export_to_csv(&rows).unwrap();

        // Header plus one line per reading
        assert_eq!(csv.trim_end().lines().count(), 4);
        assert!(csv.lines().next().unwrap().contains("recommended_crop"));
        assert!(csv.contains("Vegetables / Citrus"));
    }
}
