//! Chart Routes
//!
//! Figure endpoints consumed by the dashboard page, plus the selector
//! option list.
//!
//! - GET /api/v1/charts/bar - grouped bar chart; `?country=` refilters it
//! - GET /api/v1/charts/line - Germany life-expectancy line chart
//! - GET /api/v1/charts/map - animated life-expectancy choropleth
//! - GET /api/v1/countries - selector options and default

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartParams, CountriesResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::{DEFAULT_COUNTRY, SELECTOR_COUNTRIES};
use crate::views::{self, Figure};

/// GET /api/v1/charts/:kind
///
/// Build the requested figure from the startup subsets. The `bar` kind
/// is the reactive view: with `?country=` it returns the refiltered,
/// recolored figure the selector asked for; without it, the initial
/// all-countries figure. A country outside the subset yields an empty
/// figure, not an error.
pub async fn chart(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<Figure>> {
    let figure = match kind.as_str() {
        "bar" => views::country_bar_chart(&state.subsets.countries, params.country.as_deref()),
        "line" => views::life_exp_line_chart(&state.subsets.germany),
        "map" => views::life_exp_choropleth(&state.subsets.countries),
        _ => {
            return Err(ApiError::NotFound(format!(
                "Unknown chart kind '{}'. Use bar, line, or map",
                kind
            )))
        }
    };

    Ok(Json(figure))
}

/// GET /api/v1/countries
///
/// The closed option set for the selector control.
pub async fn countries() -> Json<CountriesResponse> {
    Json(CountriesResponse {
        countries: SELECTOR_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        default_country: DEFAULT_COUNTRY.to_string(),
    })
}
