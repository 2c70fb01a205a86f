//! Gapdash HTTP API
//!
//! The dashboard's HTTP layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - the dashboard page
//!
//! ## Artifacts
//! - `GET /api/v1/table` - Germany profile table
//! - `GET /api/v1/charts/:kind` - figure JSON (`bar`, `line`, `map`);
//!   `bar` accepts `?country=` and is the reactive view
//! - `GET /api/v1/countries` - selector options
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use gapdash::api::{serve, ApiConfig, AppState};
//! use gapdash::dataset::{Dataset, Subsets};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load()?;
//!     let subsets = Arc::new(Subsets::derive(&dataset));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(subsets, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/table", get(routes::table::profile_table))
        .route("/charts/:kind", get(routes::charts::chart))
        .route("/countries", get(routes::charts::countries));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::dashboard))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server.
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Gapdash listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Gapdash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Subsets};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = Dataset::load().unwrap();
        let subsets = Arc::new(Subsets::derive(&dataset));
        let state = AppState::new(subsets, ApiConfig::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_page_served_at_root() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_probes() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let app = create_test_app();
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "probe {}", uri);
        }
    }

    #[tokio::test]
    async fn test_table_returns_germany_profile() {
        let (status, json) = get_json(create_test_app(), "/api/v1/table").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["columns"],
            serde_json::json!(["year", "lifeExp", "pop", "gdpPercap"])
        );
        assert!(!json["rows"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_initial_bar_chart_has_all_three_countries() {
        let (status, json) = get_json(create_test_app(), "/api/v1/charts/bar").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_bar_chart_update_filters_by_country() {
        let (status, json) =
            get_json(create_test_app(), "/api/v1/charts/bar?country=Belgium").await;

        assert_eq!(status, StatusCode::OK);
        let traces = json["data"].as_array().unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0]["name"], "Belgium");
        assert_eq!(traces[0]["marker"]["color"], "#F7C0BB");
    }

    #[tokio::test]
    async fn test_bar_chart_unknown_country_is_empty_not_error() {
        let (status, json) =
            get_json(create_test_app(), "/api/v1/charts/bar?country=Atlantis").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_line_and_map_charts_served() {
        for uri in ["/api/v1/charts/line", "/api/v1/charts/map"] {
            let (status, json) = get_json(create_test_app(), uri).await;
            assert_eq!(status, StatusCode::OK, "chart {}", uri);
            assert!(!json["data"].as_array().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_unknown_chart_kind_is_not_found() {
        let (status, json) = get_json(create_test_app(), "/api/v1/charts/pie").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_countries_lists_selector_options() {
        let (status, json) = get_json(create_test_app(), "/api/v1/countries").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["countries"],
            serde_json::json!(["Germany", "Belgium", "Denmark"])
        );
        assert_eq!(json["default"], "Germany");
    }
}
