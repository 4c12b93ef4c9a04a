//! AgriSense Morocco - Backend Server
//!
//! A decision-support API for Moroccan farmers, agronomists, and
//! policymakers: regional conditions, crop and irrigation recommendations,
//! and downloadable reports.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrisense_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()
        .map_err(|e| error::AppError::Configuration(e.to_string()))?;

    tracing::info!("Starting AgriSense Morocco Server");
    tracing::info!("Environment: {}", config.environment);

    // Create application state
    let port = config.server.port;
    let state = AppState {
        config: Arc::new(config),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriSense Morocco API v1.0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            config: Arc::new(Config {
                environment: "test".to_string(),
                server: config::ServerConfig::default(),
                climate: config::ClimateConfig::default(),
                report: config::ReportConfig {
                    base_url: "https://agrisense.ma".to_string(),
                },
            }),
        }
    }

    async fn request(uri: &str) -> axum::response::Response {
        create_app(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_banner() {
        let response = request("/").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = request("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_recommendation_round_trip() {
        let response = request("/api/v1/recommendations?region=gharb&seed=42").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["recommendation"]["crop"].is_string());
        assert!(body["recommendation"]["irrigation"].is_string());
        assert_eq!(body["confidence"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_region_is_not_found() {
        let response = request("/api/v1/conditions?region=atlantis").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_csv_export_rejects_bad_days() {
        let response = request("/api/v1/reports/csv?region=haouz&days=0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
