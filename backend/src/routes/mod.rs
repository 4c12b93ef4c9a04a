//! Route definitions for AgriSense Morocco

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Region catalogue
        .nest("/regions", region_routes())
        // Synthetic conditions
        .route("/conditions", get(handlers::get_conditions))
        // Recommendations
        .nest("/recommendations", recommendation_routes())
        // Reports
        .nest("/reports", report_routes())
}

/// Region catalogue routes
fn region_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_regions))
        .route("/map", get(handlers::get_region_map))
        .route("/:name", get(handlers::get_region))
}

/// Recommendation routes
fn recommendation_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::get_recommendation).post(handlers::assess_reading),
    )
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::generate_report))
        .route("/csv", get(handlers::export_report_csv))
}
