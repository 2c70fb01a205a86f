//! Table Route
//!
//! - GET /api/v1/table - Germany profile table payload

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::views::{self, TableView};

/// GET /api/v1/table
///
/// The Germany profile projected to (year, lifeExp, pop, gdpPercap).
pub async fn profile_table(State(state): State<Arc<AppState>>) -> Json<TableView> {
    Json(views::table_view(&state.subsets.germany))
}
