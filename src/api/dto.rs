//! Data Transfer Objects
//!
//! Request and response types for the API endpoints. Figure and table
//! payloads are served as the `views` types directly; these are the
//! remaining envelopes.

use serde::{Deserialize, Serialize};

// ============================================
// CHART DTOs
// ============================================

/// Query parameters accepted by the chart endpoints.
#[derive(Debug, Deserialize)]
pub struct ChartParams {
    /// Selected country for the bar chart. Absent for the initial,
    /// unfiltered figure; ignored by the other chart kinds.
    #[serde(default)]
    pub country: Option<String>,
}

// ============================================
// SELECTOR DTOs
// ============================================

/// Selector options response.
#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    /// Options in display order
    pub countries: Vec<String>,
    /// Option selected before any interaction
    #[serde(rename = "default")]
    pub default_country: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
