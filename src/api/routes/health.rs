//! Health Routes
//!
//! Health check endpoints for monitoring and probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the derived subsets are populated. With the dataset
/// compiled in, this can only fail if startup derivation produced
/// nothing.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_dataset_health(&state) {
        true => StatusCode::OK,
        false => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dataset_ok = check_dataset_health(&state);

    Json(HealthResponse {
        status: if dataset_ok { "healthy" } else { "unhealthy" }.to_string(),
        dataset: if dataset_ok { "ok" } else { "error" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Check that the startup subsets are populated
fn check_dataset_health(state: &AppState) -> bool {
    !state.subsets.germany.is_empty() && !state.subsets.countries.is_empty()
}
